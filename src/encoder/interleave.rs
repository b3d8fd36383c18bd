/// Block splitting and codeword interleaving
use super::reed_solomon::ReedSolomonEncoder;
use super::tables::ec_block_info;
use crate::models::EcLevel;

/// Split the data codewords into Reed-Solomon blocks, append per-block ECC
/// and interleave everything into transmission order.
///
/// Blocks are split short-first: `len % num_blocks` trailing blocks carry
/// one extra codeword. Interleaved output walks data positions across the
/// blocks, then ECC positions across the blocks; its length is always
/// `data.len() + total_ecc`.
pub fn add_ecc_and_interleave(data: &[u8], version: u8, ec_level: EcLevel) -> Vec<u8> {
    let info = ec_block_info(version, ec_level).expect("version checked by encoder");
    let num_blocks = info.num_blocks;
    let ecc_len = info.ecc_per_block;

    let short_block_len = data.len() / num_blocks;
    let num_long_blocks = data.len() % num_blocks;

    let rs = ReedSolomonEncoder::new(ecc_len);
    let mut blocks: Vec<(&[u8], Vec<u8>)> = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let block_len = short_block_len + usize::from(i >= num_blocks - num_long_blocks);
        let block_data = &data[k..k + block_len];
        k += block_len;
        blocks.push((block_data, rs.remainder(block_data)));
    }

    let mut result = Vec::with_capacity(data.len() + info.total_ecc);
    for i in 0..short_block_len + 1 {
        for (block_data, _) in &blocks {
            if i < block_data.len() {
                result.push(block_data[i]);
            }
        }
    }
    for i in 0..ecc_len {
        for (_, ecc) in &blocks {
            result.push(ecc[i]);
        }
    }

    debug_assert_eq!(result.len(), data.len() + info.total_ecc);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_appends_ecc() {
        // Version 1 Low: one block, 19 data + 7 ecc
        let data: Vec<u8> = (0..19).collect();
        let out = add_ecc_and_interleave(&data, 1, EcLevel::Low);
        assert_eq!(out.len(), 26);
        assert_eq!(&out[..19], &data[..]);

        let rs = ReedSolomonEncoder::new(7);
        assert_eq!(&out[19..], &rs.remainder(&data)[..]);
    }

    #[test]
    fn test_multi_block_interleaving() {
        // Version 6 Low: 2 blocks, 36 ecc total (18 each), 136 data -> 68 each
        let data: Vec<u8> = (0..136).map(|i| (i * 7) as u8).collect();
        let out = add_ecc_and_interleave(&data, 6, EcLevel::Low);
        assert_eq!(out.len(), 136 + 36);
        // Data interleaves codeword-by-codeword across the two blocks
        assert_eq!(out[0], data[0]);
        assert_eq!(out[1], data[68]);
        assert_eq!(out[2], data[1]);
        assert_eq!(out[3], data[69]);
    }

    #[test]
    fn test_uneven_blocks_short_first() {
        // Version 5 High: 4 blocks, 88 ecc total; 46 data -> 11,11,12,12
        let data: Vec<u8> = (0..46).collect();
        let out = add_ecc_and_interleave(&data, 5, EcLevel::High);
        assert_eq!(out.len(), 46 + 88);
        // Block starts: 0, 11, 22, 34
        assert_eq!(&out[..4], &[data[0], data[11], data[22], data[34]]);
        // Position 11 exists only in the two long blocks
        assert_eq!(out[44], data[33]);
        assert_eq!(out[45], data[45]);
    }
}
