use lackey_trace_converter::output::{read_trace_file, RecordReader, TraceRecord};
use lackey_trace_converter::parser::{parse_line, AccessType, TraceLine};
use lackey_trace_converter::{convert, convert_file, ConvertError};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const SAMPLE_TRACE: &str = "\
==12345== Lackey, an example Valgrind tool
==12345== Copyright (C) 2002-2017, and GNU GPL'd, by Nicholas Nethercote.
==12345== Command: ./cachetest
==12345==
I  04a83f3c,4
 S 7fff0010,8
I  04a83f40,3
 L 0601040,8
 M 1ffefffd08,8
I  04a83f43,7
 L 1ffefffd00,4
==12345==
==12345== Counted 1 call to main()
";

fn convert_str(input: &str) -> Vec<u8> {
    let mut output = Vec::new();
    convert(Cursor::new(input), &mut output).unwrap();
    output
}

fn decode(bytes: &[u8]) -> Vec<TraceRecord> {
    RecordReader::new(Cursor::new(bytes))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_instruction_read_bytes() {
    assert_eq!(
        convert_str("I  04a83f3c, 4\n"),
        vec![
            0x3C, 0x3F, 0xA8, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00
        ]
    );
}

#[test]
fn test_data_write_record() {
    let records = decode(&convert_str("S 7fff0010, 8\n"));
    assert_eq!(records, vec![TraceRecord::new(0x7fff_0010, 3, 8)]);
}

#[test]
fn test_comment_emits_nothing() {
    assert!(convert_str("== this is a header comment\n").is_empty());
    assert!(convert_str("==not, even 0x, parsed\n").is_empty());
}

#[test]
fn test_modify_emits_nothing() {
    assert!(convert_str("M 1000, 4\n").is_empty());
}

#[test]
fn test_record_per_accepted_line_in_order() {
    let expected: Vec<TraceRecord> = SAMPLE_TRACE
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_line(line, i + 1).unwrap() {
            TraceLine::Access(access) => TraceRecord::from_access(&access),
            _ => None,
        })
        .collect();

    let records = decode(&convert_str(SAMPLE_TRACE));

    assert_eq!(records.len(), 6);
    assert_eq!(records, expected);
    assert_eq!(
        records
            .iter()
            .map(|r| r.access_type().unwrap())
            .collect::<Vec<_>>(),
        vec![
            AccessType::InstructionRead,
            AccessType::DataWrite,
            AccessType::InstructionRead,
            AccessType::DataRead,
            AccessType::InstructionRead,
            AccessType::DataRead,
        ]
    );
    assert_eq!(records[5].address, 0x1f_feff_fd00);
    assert_eq!(records[5].size, 4);
}

#[test]
fn test_conversion_is_idempotent() {
    assert_eq!(convert_str(SAMPLE_TRACE), convert_str(SAMPLE_TRACE));
}

#[test]
fn test_sample_trace_stats() {
    let mut output = Vec::new();
    let stats = convert(Cursor::new(SAMPLE_TRACE), &mut output).unwrap();

    assert_eq!(stats.lines_read, 13);
    assert_eq!(stats.comment_lines, 6);
    assert_eq!(stats.records_written, 6);
    assert_eq!(stats.instruction_reads, 3);
    assert_eq!(stats.data_reads, 2);
    assert_eq!(stats.data_writes, 1);
    assert_eq!(stats.modify_skipped, 1);
    assert_eq!(output.len() as u64, stats.records_written * 16);
}

#[test]
fn test_malformed_line_keeps_prior_records_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("cachetest");
    let output = temp_dir.path().join("trace.tr");
    std::fs::write(&input, "==1== header\nI 10, 4\nL 20, 8\nL nothexaddress, 4\nS 30, 4\n")
        .unwrap();

    let err = convert_file(&input, &output).unwrap_err();

    match err {
        ConvertError::MalformedLine(e) => {
            assert_eq!(e.line_number, 4);
            assert_eq!(e.content, "L nothexaddress, 4");
        }
        other => panic!("expected malformed line error, got {:?}", other),
    }

    let records: Vec<TraceRecord> = read_trace_file(&output)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        records,
        vec![TraceRecord::new(0x10, 0, 4), TraceRecord::new(0x20, 1, 8)]
    );
}

#[test]
fn test_convert_file_twice_is_byte_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("cachetest");
    let first = temp_dir.path().join("first.tr");
    let second = temp_dir.path().join("second.tr");
    std::fs::write(&input, SAMPLE_TRACE).unwrap();

    convert_file(&input, &first).unwrap();
    convert_file(&input, &second).unwrap();

    let first = std::fs::read(first).unwrap();
    let second = std::fs::read(second).unwrap();
    assert_eq!(first.len(), 6 * 16);
    assert_eq!(first, second);
}

#[test]
fn test_convert_file_overwrites_existing_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("cachetest");
    let output = temp_dir.path().join("trace.tr");
    std::fs::write(&input, "I 10, 4\n").unwrap();
    std::fs::write(&output, vec![0xFF; 64]).unwrap();

    convert_file(&input, &output).unwrap();

    assert_eq!(std::fs::read(&output).unwrap().len(), 16);
}
