/// A deck string that cannot be read. Import stops and nothing is applied.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("Deck string doesn't start with ydke://")]
    MissingPrefix,
    #[error("Deck string should contain 3 segments, found {0}")]
    SegmentCount(usize),
    #[error("Deck segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Deck segment is {0} bytes long, which is not a multiple of 4")]
    Misaligned(usize),
    #[error("Something wrong when reading deck segment")]
    IO(#[from] std::io::Error),
}
