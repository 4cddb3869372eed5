pub mod reader {
    use byteorder::{ReadBytesExt, LittleEndian};
    use std::io::Result;

    /// Read `byte_length / 4` little-endian u32. \
    /// Caller makes sure the length is a multiple of 4.
    pub fn read_u32_to_end<T: ReadBytesExt>(reader: &mut T, byte_length: usize) -> Result<Vec<u32>> {
        let mut vec = Vec::with_capacity(byte_length / 4);
        for _ in 0..byte_length / 4 { vec.push(reader.read_u32::<LittleEndian>()?) }
        Ok(vec)
    }
}

pub mod writer {
    use byteorder::{ByteOrder, LittleEndian};

    pub fn u32_array_to_bytes(array: &[u32]) -> Vec<u8> {
        let mut buffer = vec![0u8; array.len() * 4];
        LittleEndian::write_u32_into(array, &mut buffer);
        buffer
    }
}
