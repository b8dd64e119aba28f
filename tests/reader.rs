#![cfg(feature = "std")]

use std::{fs::File, io::BufReader};

use hidscope::avec::{DecodeOptions, Error, reader};

#[test]
fn decode_reader_mouse() {
    const PATH: &str = "fixtures/mouse.hid";
    let file = BufReader::new(File::open(PATH).unwrap());
    let d = hidscope::avec::decode_reader(file, DecodeOptions::default()).unwrap();

    let text = std::fs::read_to_string(PATH).unwrap();
    assert_eq!(d, hidscope::avec::decode_str(&text).unwrap());
    assert_eq!(d.tree.roots().len(), 1);
}

#[test]
fn decode_reader_unterminated() {
    let err = hidscope::avec::decode_reader(&b"A1 01"[..], DecodeOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        reader::Error::Decode(Error::UnterminatedCollection { open: 1, .. })
    ));
}
