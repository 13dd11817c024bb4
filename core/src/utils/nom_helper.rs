/**
 * When parsing binary formats often we parse X bytes and convert bytes to a number
 * With nom we can do that in two steps, ex:
 *   `take X bytes`
 *   `le_uX` to number
 *
 * These functions help reduce the repetitiveness of converting bytes to a number
 */
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u32, be_u64, le_u16, le_u32, le_u64},
};
use std::mem::size_of;

pub(crate) enum Endian {
    /**Little Endian */
    Le,
    /**Big Endian */
    Be,
}

/**
 * Nom two (2) bytes to u16
 * Need to specify Endianess
 */
pub(crate) fn nom_unsigned_two_bytes(data: &[u8], endian: Endian) -> nom::IResult<&[u8], u16> {
    let (input, value_data) = take(size_of::<u16>())(data)?;

    let (_, value) = match endian {
        Endian::Le => le_u16(value_data)?,
        Endian::Be => be_u16(value_data)?,
    };
    Ok((input, value))
}

/**
 * Nom four (4) bytes to u32
 * Need to specify Endianess
 */
pub(crate) fn nom_unsigned_four_bytes(data: &[u8], endian: Endian) -> nom::IResult<&[u8], u32> {
    let (input, value_data) = take(size_of::<u32>())(data)?;

    let (_, value) = match endian {
        Endian::Le => le_u32(value_data)?,
        Endian::Be => be_u32(value_data)?,
    };
    Ok((input, value))
}

/**
 * Nom eight (8) bytes to u64
 * Need to specify Endianess
 */
pub(crate) fn nom_unsigned_eight_bytes(data: &[u8], endian: Endian) -> nom::IResult<&[u8], u64> {
    let (input, value_data) = take(size_of::<u64>())(data)?;

    let (_, value) = match endian {
        Endian::Le => le_u64(value_data)?,
        Endian::Be => be_u64(value_data)?,
    };
    Ok((input, value))
}

/**
 * Nom an arbitrary amount of data and return the bytes remaining and bytes nom'd
 */
pub(crate) fn nom_data(data: &[u8], count: u64) -> nom::IResult<&[u8], &[u8]> {
    let (input, value) = take(count)(data)?;

    Ok((input, value))
}

#[cfg(test)]
mod tests {
    use crate::utils::nom_helper::{
        Endian, nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
        nom_unsigned_two_bytes,
    };

    #[test]
    fn test_nom_unsigned_two_bytes() {
        let test = [2, 0];
        let (_, results) = nom_unsigned_two_bytes(&test, Endian::Le).unwrap();
        assert_eq!(results, 2);
    }

    #[test]
    fn test_nom_unsigned_four_bytes() {
        let test = [0, 0, 0, 2];
        let (_, results) = nom_unsigned_four_bytes(&test, Endian::Be).unwrap();
        assert_eq!(results, 2);
    }

    #[test]
    fn test_nom_unsigned_eight_bytes() {
        let test = [2, 0, 0, 0, 0, 0, 0, 0];
        let (_, results) = nom_unsigned_eight_bytes(&test, Endian::Le).unwrap();
        assert_eq!(results, 2);
    }

    #[test]
    fn test_nom_data() {
        let test = [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let (_, results) = nom_data(&test, 3).unwrap();
        assert_eq!(results.len(), 3);
    }
}
