//! GL format negotiation for the RSX state tracker.
//!
//! Maps GL internal format requests onto hardware ("pipe") formats the device says it can use,
//! and answers questions about the channel layout of those hardware formats.
//!
//! ```
//! use rsxgl_format::{choose_format, FormatRequest, HardwareFormat, InternalFormat, SupportedFormats};
//!
//! let caps: SupportedFormats = [HardwareFormat::B8G8R8A8Unorm].into_iter().collect();
//! let req = FormatRequest::new(InternalFormat::Rgba8);
//! assert_eq!(choose_format(&caps, &req), Some(HardwareFormat::B8G8R8A8Unorm));
//! ```

#[macro_use]
mod macros;

pub mod caps;
pub mod config;
pub mod desc;
mod error;
pub mod gl;
pub mod pipe;
pub mod resolve;
pub mod source;
pub mod table;

pub use caps::{FormatCapabilities, SupportedFormats};
pub use config::ResolverConfig;
pub use desc::{Channel, ChannelType, Colorspace, FormatDescription, FormatLayout, Swizzle};
pub use error::FormatError;
pub use gl::{InternalFormat, PixelFormat, PixelType, GL_NONE};
pub use pipe::{BindFlags, HardwareFormat, TextureTarget};
pub use resolve::{
    choose_format, choose_format_raw, color_channel_bit_depth, depth_channel_bit_depth,
    format_datatype, internal_format_of, FormatRequest, FormatResolver,
};
pub use source::choose_source_format;
pub use table::{find_exact_format, ExactBucket, ExactFormatEntry, FormatPreferenceEntry, FORMAT_MAP};
