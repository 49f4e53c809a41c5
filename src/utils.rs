pub fn i32_to_u8_array(x: i32) -> [u8; 4] {
    let x = x as u32;
    let b3 = ((x >> 24) & 0xff) as u8;
    let b2 = ((x >> 16) & 0xff) as u8;
    let b1 = ((x >> 8) & 0xff) as u8;
    let b0 = (x & 0xff) as u8;

    [b0, b1, b2, b3]
}

pub fn i64_to_u8_array(x: i64) -> [u8; 8] {
    let x = x as u64;
    let b7 = ((x >> 56) & 0xff) as u8;
    let b6 = ((x >> 48) & 0xff) as u8;
    let b5 = ((x >> 40) & 0xff) as u8;
    let b4 = ((x >> 32) & 0xff) as u8;
    let b3 = ((x >> 24) & 0xff) as u8;
    let b2 = ((x >> 16) & 0xff) as u8;
    let b1 = ((x >> 8) & 0xff) as u8;
    let b0 = (x & 0xff) as u8;

    [b0, b1, b2, b3, b4, b5, b6, b7]
}

pub fn u8_array_to_i32(data: &[u8; 4]) -> i32 {
    (((data[0] as u32) << 0)
        + ((data[1] as u32) << 8)
        + ((data[2] as u32) << 16)
        + ((data[3] as u32) << 24)) as i32
}

pub fn u8_array_to_i64(data: &[u8; 8]) -> i64 {
    (((data[0] as u64) << 0)
        + ((data[1] as u64) << 8)
        + ((data[2] as u64) << 16)
        + ((data[3] as u64) << 24)
        + ((data[4] as u64) << 32)
        + ((data[5] as u64) << 40)
        + ((data[6] as u64) << 48)
        + ((data[7] as u64) << 56)) as i64
}

#[cfg(test)]
mod utils_tests {
    use crate::utils::{i32_to_u8_array, i64_to_u8_array, u8_array_to_i32, u8_array_to_i64};

    #[test]
    fn test_i32_to_u8_array() {
        assert_eq!(i32_to_u8_array(0), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(i32_to_u8_array(2005), [0xd5, 0x07, 0x00, 0x00]);
        assert_eq!(i32_to_u8_array(-1), [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(i32_to_u8_array(0x12345678), [0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_i64_to_u8_array() {
        assert_eq!(
            i64_to_u8_array(9000),
            [0x28, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            i64_to_u8_array(-1),
            [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_u8_array_to_i32() {
        assert_eq!(u8_array_to_i32(&[0xd5, 0x07, 0x00, 0x00]), 2005);
        assert_eq!(u8_array_to_i32(&[0xff, 0xff, 0xff, 0xff]), -1);
    }

    #[test]
    fn test_u8_array_to_i64() {
        assert_eq!(
            u8_array_to_i64(&[0x28, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
            9000
        );
        assert_eq!(
            u8_array_to_i64(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]),
            -1
        );
    }

    #[test]
    fn test_i32_round_trip() {
        for value in &[0, 1, -1, 16, 2001, 2007, i32::max_value(), i32::min_value()] {
            assert_eq!(u8_array_to_i32(&i32_to_u8_array(*value)), *value);
        }
    }
}
