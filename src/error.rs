use core::fmt;

/// Errors returned by the hashing and block-iteration entry points.
///
/// Every error is reported before any state or output buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A SHA3 variant was selected by an output size that isn't 224, 256, 384 or 512.
	UnknownVariant {
		bits: u16,
	},
	/// A SHA3 variant was selected by a name that doesn't match any variant.
	UnknownVariantName,
	/// An ECB input that is empty or not a whole number of blocks.
	InvalidInputLength {
		len: usize,
	},
	/// An output buffer that can't hold the result.
	OutputTooShort {
		required: usize,
		actual: usize,
	},
}

/// The two broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// The caller asked for something that doesn't exist.
	Configuration,
	/// The caller passed buffers that don't satisfy the length rules.
	InputValidation,
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnknownVariant {..} | Self::UnknownVariantName => ErrorKind::Configuration,
			Self::InvalidInputLength {..} | Self::OutputTooShort {..} => ErrorKind::InputValidation,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnknownVariant {bits} => {
				write!(f, "no SHA3 variant with a {bits}-bit output")
			}
			Self::UnknownVariantName => f.write_str("unrecognized SHA3 variant name"),
			Self::InvalidInputLength {len} => {
				write!(f, "input length {len} is not a positive multiple of the block size")
			}
			Self::OutputTooShort {required, actual} => {
				write!(f, "output buffer too short: need {required} bytes, got {actual}")
			}
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[test]
fn kinds() {
	assert_eq!(Error::UnknownVariant {bits: 160}.kind(), ErrorKind::Configuration);
	assert_eq!(Error::UnknownVariantName.kind(), ErrorKind::Configuration);
	assert_eq!(Error::InvalidInputLength {len: 3}.kind(), ErrorKind::InputValidation);
	assert_eq!(
		Error::OutputTooShort {required: 32, actual: 16}.kind(),
		ErrorKind::InputValidation,
	);
}

#[cfg(feature = "std")]
#[test]
fn display() {
	assert_eq!(
		Error::OutputTooShort {required: 32, actual: 16}.to_string(),
		"output buffer too short: need 32 bytes, got 16",
	);
	assert_eq!(
		Error::UnknownVariant {bits: 160}.to_string(),
		"no SHA3 variant with a 160-bit output",
	);
}
