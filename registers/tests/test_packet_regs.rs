use raster_registers::{DepthColorWord, FieldPairWord, InvAreaWord, Register};

/// Offsets are consecutive 32-bit words starting at the base.
#[test]
fn test_word_offsets_are_consecutive() {
    for (i, offset) in raster_registers::WORD_OFFSETS.iter().enumerate() {
        assert_eq!(*offset, (i * 4) as u32);
    }
    assert_eq!(raster_registers::PACKET_SIZE, 24);
}

#[test]
fn test_field_pair_placement() {
    let word = FieldPairWord::new(0x00A0, 0x0078);
    assert_eq!(word.to_raw(), 0x0078_00A0);
    assert_eq!(word.lo(), 0x00A0);
    assert_eq!(word.hi(), 0x0078);
}

#[test]
fn test_depth_color_placement() {
    let word = DepthColorWord::new(0x00FE, 0xE0);
    assert_eq!(word.to_raw(), 0x00E0_00FE);
    assert_eq!(word.rsvd(), 0);
}

#[test]
fn test_depth_color_negative_depth_stays_in_low_half() {
    let depth = (-3i16) as u16;
    let word = DepthColorWord::new(depth, 0x1C);
    assert_eq!(word.depth() as i16, -3);
    assert_eq!(word.color(), 0x1C);
    assert_eq!(word.rsvd(), 0);
}

#[test]
fn test_inv_area_full_width() {
    let word = InvAreaWord::new(0x0200_0000);
    assert_eq!(word.to_raw(), 0x0200_0000);
    assert_eq!(word.inv_area(), 1 << 25);

    let raw = unsafe { InvAreaWord::from_raw(0xFFFF_FFFF) };
    assert_eq!(raw.inv_area(), -1);
}
