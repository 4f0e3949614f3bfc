use log::debug;

use crate::bitstream::bit_sequence::BitSequence;
use crate::code_table::CodeTable;
use crate::error::Result;

/// Decode `message` with `table`.
///
/// Fails with TruncatedCode if the message stops part way through a codeword, and with
/// InvalidCode if the bits lead somewhere the table has no codeword (only possible when the
/// table is not the one the message was encoded with).
pub fn decode(message: &BitSequence, table: &CodeTable) -> Result<Vec<char>> {
    let symbols = message.decode_with_table(table)?;
    debug!("Decoded {} bits into {} symbols", message.len(), symbols.len());
    Ok(symbols)
}

/// decode(), collected into a String.
pub fn decode_to_string(message: &BitSequence, table: &CodeTable) -> Result<String> {
    Ok(decode(message, table)?.into_iter().collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::encode;
    use crate::error::CodingError;
    use crate::huffman_coding::huffman::build_huffman_table;
    use crate::shannon_fano::shannon_fano::build_shannon_fano_table;

    #[test]
    fn round_trip_both_tables() {
        let text = "she sells sea shells by the sea shore";
        let huffman = build_huffman_table(text).unwrap();
        let (shannon_fano, _) = build_shannon_fano_table(text).unwrap();
        for table in [&huffman, &shannon_fano] {
            let message = encode(text, table).unwrap();
            assert_eq!(decode_to_string(&message, table).unwrap(), text);
        }
    }

    #[test]
    fn single_symbol_round_trip() {
        let table = build_huffman_table("a").unwrap();
        let message = encode("a", &table).unwrap();
        assert_eq!(message.len(), 1);
        assert_eq!(decode(&message, &table).unwrap(), vec!['a']);
    }

    #[test]
    fn truncated_message() {
        let table = build_huffman_table("aaaabbbcc").unwrap();
        let mut message = encode("aaaabbbcc", &table).unwrap();
        message.pop();
        assert!(matches!(
            decode(&message, &table),
            Err(CodingError::TruncatedCode { pending: 1, .. })
        ));
    }

    #[test]
    fn foreign_table_gives_invalid_code() {
        let table = CodeTable::from_codewords(vec![('a', "0".parse().unwrap())]).unwrap();
        let message: BitSequence = "001".parse().unwrap();
        assert!(matches!(
            decode(&message, &table),
            Err(CodingError::InvalidCode { position: 2 })
        ));
    }

    #[test]
    fn empty_message_decodes_to_nothing() {
        let table = build_huffman_table("ab").unwrap();
        assert!(decode(&BitSequence::new(), &table).unwrap().is_empty());
    }
}
