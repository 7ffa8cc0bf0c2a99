//! Tests for table-order generation over whole tables

use cursorgen::util::testing;
use cursorgen::{build_instance_text, render_instances, NodeSpec, WEB_AUDIO_NODES};
use regex::Regex;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_three_entry_table_when_generating_then_matches_known_output() {
    // Arrange
    let table = [
        NodeSpec::new("Delay", 1),
        NodeSpec::new("Gain", 2),
        NodeSpec::new("Microphone", 0),
    ];

    // Act
    let text = build_instance_text(&table).unwrap();

    // Assert
    let expected = "\
else instance cursorResDelay :: CursorRes (CTOR.Delay a b c) ptr (NodeC (AU.TDelay ptr) edge) edge

else instance cursorResGain :: CursorRes (CTOR.Gain a b) ptr (NodeC (AU.TGain ptr) edge) edge
else instance cursorResMicrophone :: CursorRes (CTOR.Microphone a) ptr (NodeC (AU.TMicrophone ptr) edge) edge
";
    assert_eq!(text, expected);
}

#[test]
fn given_shipped_table_when_generating_then_line_counts_match() {
    // Act
    let lines = render_instances(WEB_AUDIO_NODES).unwrap();

    // Assert - 9 single-param + 2 double-param + 14 triple-param
    // declarations, one blank separator per triple-param entry, nothing
    // for the one code-3 entry
    let declarations = lines.iter().filter(|line| !line.is_empty()).count();
    let blanks = lines.iter().filter(|line| line.is_empty()).count();
    assert_eq!(declarations, 25);
    assert_eq!(blanks, 14);
    assert_eq!(lines.len(), 39);
}

#[test]
fn given_shipped_table_when_generating_then_order_is_preserved() {
    // Act
    let lines = render_instances(WEB_AUDIO_NODES).unwrap();

    // Assert - declaration order of the table, minus code-3 entries
    let rendered_names: Vec<&str> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let rest = line.strip_prefix("else instance cursorRes").unwrap();
            rest.split_whitespace().next().unwrap()
        })
        .collect();
    let expected: Vec<&str> = WEB_AUDIO_NODES
        .iter()
        .filter(|spec| spec.arity != 3)
        .map(|spec| spec.name)
        .collect();
    assert_eq!(rendered_names, expected);
}

#[test]
fn given_shipped_table_when_generating_then_lines_have_declaration_shape() {
    let re = Regex::new(
        r"^else instance cursorRes[A-Za-z]+ :: CursorRes \(CTOR\.[A-Za-z]+ a( b( c)?)?\) ptr \(NodeC \(AU\.T[A-Za-z]+ ptr\) edge\) edge$",
    )
    .unwrap();

    let lines = render_instances(WEB_AUDIO_NODES).unwrap();
    for line in lines.iter().filter(|line| !line.is_empty()) {
        assert!(re.is_match(line), "malformed declaration: {}", line);
    }
}

#[test]
fn given_same_table_when_generating_twice_then_output_is_byte_identical() {
    let first = build_instance_text(WEB_AUDIO_NODES).unwrap();
    let second = build_instance_text(WEB_AUDIO_NODES).unwrap();
    assert_eq!(first, second);
}

#[test]
fn given_table_with_bad_code_when_generating_then_fails_with_node_and_code() {
    // Arrange
    let table = [NodeSpec::new("Gain", 2), NodeSpec::new("Oddball", 9)];

    // Act
    let err = render_instances(&table).unwrap_err();

    // Assert
    assert_eq!(err.to_string(), "unknown arity code 9 for node: Oddball");
}
