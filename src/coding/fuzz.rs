use pattern_delimited::coding::{decode, encode};

fn main() {
    afl::fuzz!(|data: &[u8]| {
        let mut source = data;

        loop {
            let before = source.len();
            match decode(&mut source) {
                Ok(Some((value, len))) => {
                    assert_eq!(len, before - source.len());

                    let frame = encode(value);
                    assert!(frame.len() <= len);

                    let mut again = frame.as_bytes();
                    assert_eq!(Some((value, frame.len())), decode(&mut again).unwrap());
                }
                Ok(None) => break,
                Err(_) => break,
            }
        }
    });
}
