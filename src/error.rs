use core::fmt;
use failure::Fail;

#[derive(Debug)]
pub struct FrameHeaderError {
	pub kind: ErrorKind,
	pub header: u32,
}

impl fmt::Display for FrameHeaderError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}, header 0x{:08X}", self.kind, self.header)
	}
}

impl Fail for FrameHeaderError {
	// Delegate `cause` to ErrorKind
	fn cause(&self) -> Option<&dyn Fail> {
		self.kind.cause()
	}
}

#[derive(Debug, Fail, PartialEq)]
pub enum ErrorKind {
	#[fail(display = "Missing frame sync pattern (0b11111111111)")]
	InvalidSync,
}

impl ErrorKind {
	pub(crate) fn at(self, header: u32) -> FrameHeaderError {
		FrameHeaderError { kind: self, header }
	}
}
