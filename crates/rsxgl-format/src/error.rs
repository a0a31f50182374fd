use thiserror::Error;

/// Errors produced when decoding raw token values.
///
/// Format negotiation itself never fails: "no acceptable hardware format" is reported as `None`
/// by the resolver. This type only covers turning raw `u32` words into typed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown GL internal format {0:#x}")]
    UnknownInternalFormat(u32),

    #[error("unknown GL pixel format {0:#x}")]
    UnknownPixelFormat(u32),

    #[error("unknown GL pixel type {0:#x}")]
    UnknownPixelType(u32),

    #[error("unknown hardware format {0}")]
    UnknownHardwareFormat(u32),

    #[error("unknown texture target {0}")]
    UnknownTextureTarget(u32),
}
