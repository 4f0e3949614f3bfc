use entropy_coders::{
    build_huffman_table, build_shannon_fano_table, compression_ratio_of, decode, decode_to_string,
    encode, entropy_of, run, Algorithm, BitSequence, CodeTable, CodingError,
};

#[test]
fn skewed_input_huffman() {
    let input = "aaaabbbcc";
    let table = build_huffman_table(input).unwrap();
    assert_eq!(table.get('a').unwrap().len(), 1);
    assert_eq!(table.get('b').unwrap().len(), 2);
    assert_eq!(table.get('c').unwrap().len(), 2);
    assert!((entropy_of(input) - 1.53).abs() < 0.01);

    let message = encode(input, &table).unwrap();
    assert_eq!(decode_to_string(&message, &table).unwrap(), input);
    assert!((compression_ratio_of(input, &message).unwrap() - 72.0 / 14.0).abs() < 1e-12);
}

#[test]
fn single_symbol_input() {
    for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
        let report = run(algorithm, "a").unwrap();
        assert_eq!(report.table.get('a').unwrap().len(), 1);
        assert_eq!(report.encoded.len(), 1);
        assert_eq!(report.decoded, "a");
        assert_eq!(report.entropy, 0.0);
    }
}

#[test]
fn empty_input() {
    assert!(matches!(build_huffman_table(""), Err(CodingError::EmptyInput)));
    assert!(matches!(build_shannon_fano_table(""), Err(CodingError::EmptyInput)));
}

#[test]
fn one_bit_short_is_truncated() {
    // the final 'c' is "01", so dropping a bit leaves "0" dangling
    let table = build_huffman_table("aaaabbbcc").unwrap();
    assert_eq!(table.get('c').unwrap().len(), 2);
    let mut message = encode("aaaabbbcc", &table).unwrap();
    let full = message.len();
    message.truncate(full - 1);
    assert!(matches!(
        decode(&message, &table),
        Err(CodingError::TruncatedCode { pending: 1, position: 13 })
    ));
}

#[test]
fn one_bit_short_with_one_bit_final_codeword() {
    // the final 'a' is the one bit code "1", so the shorter message is still complete
    let table = build_huffman_table("abracadabra").unwrap();
    assert_eq!(table.get('a').unwrap().len(), 1);
    let mut message = encode("abracadabra", &table).unwrap();
    let full = message.len();
    message.truncate(full - 1);
    assert_eq!(decode_to_string(&message, &table).unwrap(), "abracadabr");
}

#[test]
fn uniform_shannon_fano() {
    let (table, report) = build_shannon_fano_table("dcbaabcdbadc").unwrap();
    assert_eq!(report.len(), 4);
    for (_, code) in table.iter() {
        assert_eq!(code.len(), 2);
    }
    for e in report.entries() {
        assert!((e.probability - 0.25).abs() < 1e-12);
    }
}

#[test]
fn foreign_table_errors() {
    let table = CodeTable::from_codewords(vec![
        ('x', "0".parse::<BitSequence>().unwrap()),
        ('y', "10".parse::<BitSequence>().unwrap()),
    ])
    .unwrap();
    assert!(matches!(encode("xyz", &table), Err(CodingError::UnknownSymbol('z'))));

    let message: BitSequence = "01011".parse().unwrap();
    assert!(matches!(
        decode(&message, &table),
        Err(CodingError::InvalidCode { position: 4 })
    ));
}

#[test]
fn failed_append_leaves_sequence_unchanged() {
    let table = build_huffman_table("ab").unwrap();
    let mut bits: BitSequence = "11".parse().unwrap();
    assert!(bits.append_from_table("abq".chars(), &table).is_err());
    assert_eq!(bits.to_string(), "11");
}

#[test]
fn shared_table_across_threads() {
    let text = "it was the best of times, it was the worst of times";
    let table = build_huffman_table(text).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let message = encode(text, &table).unwrap();
                assert_eq!(decode_to_string(&message, &table).unwrap(), text);
            });
        }
    });
}
