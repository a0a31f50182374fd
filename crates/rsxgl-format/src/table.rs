//! Static format tables: the exact-match buckets and the preference table.
//!
//! Both are ordered and scanned front to back; the first hit wins.

use crate::gl::{InternalFormat, PixelFormat, PixelType};
use crate::pipe::HardwareFormat;

/// One row of the preference table: a set of equivalent GL internal formats and the hardware
/// formats to try for them, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPreferenceEntry {
    pub internal_formats: &'static [InternalFormat],
    pub candidates: &'static [HardwareFormat],
}

impl FormatPreferenceEntry {
    pub fn contains(&self, internal_format: InternalFormat) -> bool {
        self.internal_formats.contains(&internal_format)
    }

    /// Canonical GL name for this entry.
    pub fn primary_internal_format(&self) -> Option<InternalFormat> {
        self.internal_formats.first().copied()
    }

    pub fn primary_candidate(&self) -> Option<HardwareFormat> {
        self.candidates.first().copied()
    }
}

/// Builds a [`FormatPreferenceEntry`], optionally splicing one of the shared fallback chains
/// after the entry's own candidates.
macro_rules! entry {
    ([$($gl:ident),+] => [$($hw:ident),*]) => {
        FormatPreferenceEntry {
            internal_formats: &[$(InternalFormat::$gl),+],
            candidates: &[$(HardwareFormat::$hw),*],
        }
    };
    ([$($gl:ident),+] => [$($hw:ident),*] + RGBA) => {
        entry!([$($gl),+] => [$($hw,)* B8G8R8A8Unorm, A8R8G8B8Unorm, A8B8G8R8Unorm, B5G6R5Unorm])
    };
    ([$($gl:ident),+] => [$($hw:ident),*] + RGB) => {
        entry!([$($gl),+] => [
            $($hw,)*
            B8G8R8X8Unorm, X8R8G8B8Unorm, X8B8G8R8Unorm,
            B8G8R8A8Unorm, A8R8G8B8Unorm, A8B8G8R8Unorm,
            B5G6R5Unorm
        ])
    };
    ([$($gl:ident),+] => [$($hw:ident),*] + SRGBA) => {
        entry!([$($gl),+] => [$($hw,)* B8G8R8A8Srgb, A8R8G8B8Srgb, A8B8G8R8Srgb])
    };
    ([$($gl:ident),+] => [$($hw:ident),*] + DEPTH) => {
        entry!([$($gl),+] => [
            $($hw,)*
            Z24X8Unorm, X8Z24Unorm, Z16Unorm, Z24UnormS8Uint, S8UintZ24Unorm
        ])
    };
    ([$($gl:ident),+] => [$($hw:ident),*] + YUV) => {
        entry!([$($gl),+] => [$($hw,)* Uyvy, Yuyv, Yv12, Yv16, Iyuv, Nv12, Nv21])
    };
}

/// GL internal formats mapped to ordered hardware format candidates.
///
/// An internal format is looked up in the first entry that lists it; later entries never
/// shadow earlier ones.
pub static FORMAT_MAP: &[FormatPreferenceEntry] = &[
    // Basic RGB/RGBA.
    entry!([Rgb10, Rgb10A2] => [B10G10R10A2Unorm] + RGBA),
    entry!([Rgba, Rgba8] => [R8G8B8A8Unorm] + RGBA),
    entry!([Bgra] => [B8G8R8A8Unorm] + RGBA),
    entry!([Rgb, Rgb8] => [R8G8B8X8Unorm] + RGB),
    entry!([Rgb12, Rgb16, Rgba12, Rgba16] => [R16G16B16A16Unorm] + RGBA),
    entry!([Rgba4, Rgba2] => [B4G4R4A4Unorm] + RGBA),
    entry!([Rgb5A1] => [B5G5R5A1Unorm] + RGBA),
    entry!([R3G3B2] => [B2G3R3Unorm, B5G6R5Unorm, B5G5R5A1Unorm] + RGBA),
    entry!([Rgb5, Rgb4] => [B5G6R5Unorm, B5G5R5A1Unorm] + RGBA),
    // Alpha.
    entry!([Alpha12, Alpha16] => [A16Unorm, A8Unorm] + RGBA),
    entry!([Alpha, Alpha4, Alpha8, CompressedAlpha] => [A8Unorm] + RGBA),
    // Luminance.
    entry!([Luminance12, Luminance16] => [L16Unorm, L8Unorm] + RGB),
    entry!([Luminance, Luminance4, Luminance8] => [L8Unorm] + RGB),
    // Luminance/alpha.
    entry!([Luminance12Alpha4, Luminance12Alpha12, Luminance16Alpha16] => [L16A16Unorm, L8A8Unorm] + RGBA),
    entry!([LuminanceAlpha, Luminance6Alpha2, Luminance8Alpha8] => [L8A8Unorm] + RGBA),
    entry!([Luminance4Alpha4] => [L4A4Unorm, L8A8Unorm] + RGBA),
    // Intensity.
    entry!([Intensity12, Intensity16] => [I16Unorm, I8Unorm] + RGBA),
    entry!([Intensity, Intensity4, Intensity8, CompressedIntensity] => [I8Unorm] + RGBA),
    // YCbCr.
    entry!([YcbcrMesa] => [] + YUV),
    // Compressed. Only meaningful for sampler views.
    entry!([CompressedRgb] => [Dxt1Rgb] + RGB),
    entry!([CompressedRgba] => [Dxt5Rgba] + RGBA),
    entry!([RgbS3tc, Rgb4S3tc, CompressedRgbS3tcDxt1] => [Dxt1Rgb]),
    entry!([CompressedRgbaS3tcDxt1] => [Dxt1Rgba]),
    entry!([RgbaS3tc, Rgba4S3tc, CompressedRgbaS3tcDxt3] => [Dxt3Rgba]),
    entry!([CompressedRgbaS3tcDxt5] => [Dxt5Rgba]),
    // Depth.
    entry!([DepthComponent16] => [Z16Unorm] + DEPTH),
    entry!([DepthComponent24] => [Z24X8Unorm, X8Z24Unorm] + DEPTH),
    entry!([DepthComponent32] => [Z32Unorm] + DEPTH),
    entry!([DepthComponent] => [] + DEPTH),
    entry!([DepthComponent32F] => [Z32Float]),
    // Stencil.
    entry!([StencilIndex, StencilIndex1, StencilIndex4, StencilIndex8, StencilIndex16]
        => [S8Uint, Z24UnormS8Uint, S8UintZ24Unorm]),
    // Depth/stencil.
    entry!([DepthStencil, Depth24Stencil8] => [Z24UnormS8Uint, S8UintZ24Unorm]),
    entry!([Depth32FStencil8] => [Z32FloatS8X24Uint]),
    // sRGB.
    entry!([Srgb, Srgb8, SrgbAlpha, Srgb8Alpha8] => [] + SRGBA),
    entry!([CompressedSrgb, CompressedSrgbS3tcDxt1] => [Dxt1Srgb] + SRGBA),
    entry!([CompressedSrgbAlphaS3tcDxt1] => [Dxt1Srgba]),
    entry!([CompressedSrgbAlpha, CompressedSrgbAlphaS3tcDxt3] => [Dxt3Srgba] + SRGBA),
    entry!([CompressedSrgbAlphaS3tcDxt5] => [Dxt5Srgba]),
    entry!([SluminanceAlpha, Sluminance8Alpha8, CompressedSluminance, CompressedSluminanceAlpha]
        => [L8A8Srgb] + SRGBA),
    entry!([Sluminance, Sluminance8] => [L8Srgb] + SRGBA),
    // 16-bit float.
    entry!([Rgba16F] => [R16G16B16A16Float, R32G32B32A32Float]),
    entry!([Rgb16F] => [R16G16B16Float, R16G16B16A16Float, R32G32B32Float, R32G32B32A32Float]),
    entry!([LuminanceAlpha16F] => [L16A16Float, R16G16B16A16Float, L32A32Float, R32G32B32A32Float]),
    entry!([Alpha16F] => [
        A16Float, L16A16Float, A32Float, R16G16B16A16Float, L32A32Float, R32G32B32A32Float
    ]),
    entry!([Intensity16F] => [
        I16Float, L16A16Float, I32Float, R16G16B16A16Float, L32A32Float, R32G32B32A32Float
    ]),
    entry!([Luminance16F] => [
        L16Float, L16A16Float, L32Float, R16G16B16A16Float, L32A32Float, R32G32B32A32Float
    ]),
    entry!([R16F] => [
        R16Float, R16G16Float, R32Float, R16G16B16A16Float, R32G32Float, R32G32B32A32Float
    ]),
    entry!([Rg16F] => [R16G16Float, R16G16B16A16Float, R32G32Float, R32G32B32A32Float]),
    // 32-bit float.
    entry!([Rgba32F] => [R32G32B32A32Float, R16G16B16A16Float]),
    entry!([Rgb32F] => [R32G32B32Float, R32G32B32A32Float, R16G16B16A16Float]),
    entry!([LuminanceAlpha32F] => [L32A32Float, R32G32B32A32Float, L16A16Float, R16G16B16A16Float]),
    entry!([Alpha32F] => [
        A32Float, L32A32Float, R32G32B32A32Float, A16Float, L16A16Float, R16G16B16A16Float
    ]),
    entry!([Intensity32F] => [
        I32Float, L32A32Float, R32G32B32A32Float, I16Float, L16A16Float, R16G16B16A16Float
    ]),
    entry!([Luminance32F] => [
        L32Float, L32A32Float, R32G32B32A32Float, L16Float, L16A16Float, R16G16B16A16Float
    ]),
    entry!([R32F] => [
        R32Float, R32G32Float, R32G32B32A32Float, R16Float, R16G16Float, R16G16B16A16Float
    ]),
    entry!([Rg32F] => [R32G32Float, R32G32B32A32Float, R16G16Float, R16G16B16A16Float]),
    // R/RG.
    entry!([Red, R8] => [R8Unorm]),
    entry!([Rg, Rg8] => [R8G8Unorm]),
    entry!([R16] => [R16Unorm]),
    entry!([Rg16] => [R16G16Unorm]),
    // Compressed R/RG and luminance.
    entry!([CompressedRed, CompressedRedRgtc1] => [Rgtc1Unorm, R8Unorm]),
    entry!([CompressedSignedRedRgtc1] => [Rgtc1Snorm]),
    entry!([CompressedRg, CompressedRgRgtc2] => [Rgtc2Unorm, R8G8Unorm]),
    entry!([CompressedSignedRgRgtc2] => [Rgtc2Snorm]),
    entry!([CompressedLuminance, CompressedLuminanceLatc1] => [Latc1Unorm, L8Unorm]),
    entry!([CompressedSignedLuminanceLatc1] => [Latc1Snorm]),
    entry!([CompressedLuminanceAlpha, CompressedLuminanceAlphaLatc2, CompressedLuminanceAlpha3dcAti]
        => [Latc2Unorm, L8A8Unorm]),
    entry!([CompressedSignedLuminanceAlphaLatc2] => [Latc2Snorm]),
    // ETC1.
    entry!([Etc1Rgb8] => [Etc1Rgb8]),
    // Integer.
    entry!([RedInteger, GreenInteger, BlueInteger, RgbaInteger, BgraInteger, Rgba8I]
        => [R8G8B8A8Sint]),
    entry!([RgbInteger, BgrInteger, Rgb8I] => [R8G8B8Sint, R8G8B8A8Sint]),
    entry!([AlphaInteger, Alpha8I] => [A8Sint]),
    entry!([Alpha16I] => [A16Sint]),
    entry!([Alpha32I] => [A32Sint]),
    entry!([Alpha8UI] => [A8Uint]),
    entry!([Alpha16UI] => [A16Uint]),
    entry!([Alpha32UI] => [A32Uint]),
    entry!([Intensity8I] => [I8Sint]),
    entry!([Intensity16I] => [I16Sint]),
    entry!([Intensity32I] => [I32Sint]),
    entry!([Intensity8UI] => [I8Uint]),
    entry!([Intensity16UI] => [I16Uint]),
    entry!([Intensity32UI] => [I32Uint]),
    entry!([Luminance8I] => [L8Sint]),
    entry!([Luminance16I] => [L16Sint]),
    entry!([Luminance32I] => [L32Sint]),
    entry!([LuminanceInteger, Luminance8UI] => [L8Uint]),
    entry!([Luminance16UI] => [L16Uint]),
    entry!([Luminance32UI] => [L32Uint]),
    entry!([LuminanceAlphaInteger, LuminanceAlpha8I] => [L8A8Sint]),
    entry!([LuminanceAlpha16I] => [L16A16Sint]),
    entry!([LuminanceAlpha32I] => [L32A32Sint]),
    entry!([LuminanceAlpha8UI] => [L8A8Uint]),
    entry!([LuminanceAlpha16UI] => [L16A16Uint]),
    entry!([LuminanceAlpha32UI] => [L32A32Uint]),
    entry!([Rgb16I] => [R16G16B16Sint, R16G16B16A16Sint]),
    entry!([Rgba16I] => [R16G16B16A16Sint]),
    entry!([Rgb32I] => [R32G32B32Sint, R32G32B32A32Sint]),
    entry!([Rgba32I] => [R32G32B32A32Sint]),
    entry!([Rgba8UI] => [R8G8B8A8Uint]),
    entry!([Rgb8UI] => [R8G8B8Uint, R8G8B8A8Uint]),
    entry!([Rgb16UI] => [R16G16B16Uint, R16G16B16A16Uint]),
    entry!([Rgba16UI] => [R16G16B16A16Uint]),
    entry!([Rgb32UI] => [R32G32B32Uint, R32G32B32A32Uint]),
    entry!([Rgba32UI] => [R32G32B32A32Uint]),
    entry!([R8I] => [R8Sint]),
    entry!([R16I] => [R16Sint]),
    entry!([R32I] => [R32Sint]),
    entry!([R8UI] => [R8Uint]),
    entry!([R16UI] => [R16Uint]),
    entry!([R32UI] => [R32Uint]),
    entry!([Rg8I] => [R8G8Sint]),
    entry!([Rg16I] => [R16G16Sint]),
    entry!([Rg32I] => [R32G32Sint]),
    entry!([Rg8UI] => [R8G8Uint]),
    entry!([Rg16UI] => [R16G16Uint]),
    entry!([Rg32UI] => [R32G32Uint]),
    // Signed normalized.
    entry!([RedSnorm, R8Snorm] => [R8Snorm, R8G8Snorm, R8G8B8A8Snorm]),
    entry!([R16Snorm] => [
        R16Snorm, R16G16Snorm, R16G16B16A16Snorm, R8Snorm, R8G8Snorm, R8G8B8A8Snorm
    ]),
    entry!([RgSnorm, Rg8Snorm] => [R8G8Snorm, R8G8B8A8Snorm]),
    entry!([Rg16Snorm] => [R16G16Snorm, R16G16B16A16Snorm, R8G8Snorm, R8G8B8A8Snorm]),
    entry!([RgbSnorm, Rgb8Snorm, RgbaSnorm, Rgba8Snorm] => [R8G8B8A8Snorm]),
    entry!([Rgb16Snorm, Rgba16Snorm] => [R16G16B16A16Snorm, R8G8B8A8Snorm]),
    entry!([AlphaSnorm, Alpha8Snorm] => [A8Snorm, R8G8B8A8Snorm]),
    entry!([Alpha16Snorm] => [A16Snorm, R16G16B16A16Snorm, A8Snorm, R8G8B8A8Snorm]),
    entry!([LuminanceSnorm, Luminance8Snorm] => [L8Snorm, R8G8B8A8Snorm]),
    entry!([Luminance16Snorm] => [L16Snorm, R16G16B16A16Snorm, L8Snorm, R8G8B8A8Snorm]),
    entry!([LuminanceAlphaSnorm, Luminance8Alpha8Snorm] => [L8A8Snorm, R8G8B8A8Snorm]),
    entry!([Luminance16Alpha16Snorm] => [L16A16Snorm, R16G16B16A16Snorm, L8A8Snorm, R8G8B8A8Snorm]),
    entry!([IntensitySnorm, Intensity8Snorm] => [I8Snorm, R8G8B8A8Snorm]),
    entry!([Intensity16Snorm] => [I16Snorm, R16G16B16A16Snorm, I8Snorm, R8G8B8A8Snorm]),
    // Packed.
    entry!([Rgb9E5] => [R9G9B9E5Float]),
    entry!([R11FG11FB10F] => [R11G11B10Float]),
    entry!([Rgb10A2UI] => [B10G10R10A2Uint]),
];

/// First preference entry listing `internal_format`.
pub fn find_preference_entry(internal_format: InternalFormat) -> Option<&'static FormatPreferenceEntry> {
    FORMAT_MAP.iter().find(|entry| entry.contains(internal_format))
}

/// A client `(format, type)` pair whose bytes are exactly the layout of `hardware`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactFormatEntry {
    pub format: PixelFormat,
    pub ty: PixelType,
    pub hardware: HardwareFormat,
}

const fn exact(format: PixelFormat, ty: PixelType, hardware: HardwareFormat) -> ExactFormatEntry {
    ExactFormatEntry {
        format,
        ty,
        hardware,
    }
}

static RGBA8888: &[ExactFormatEntry] = &[
    exact(PixelFormat::Rgba, PixelType::UnsignedInt8888, HardwareFormat::A8B8G8R8Unorm),
    exact(PixelFormat::AbgrExt, PixelType::UnsignedInt8888Rev, HardwareFormat::A8B8G8R8Unorm),
    exact(PixelFormat::Rgba, PixelType::UnsignedInt8888Rev, HardwareFormat::R8G8B8A8Unorm),
    exact(PixelFormat::AbgrExt, PixelType::UnsignedInt8888, HardwareFormat::R8G8B8A8Unorm),
    exact(PixelFormat::Bgra, PixelType::UnsignedInt8888, HardwareFormat::A8R8G8B8Unorm),
    exact(PixelFormat::Bgra, PixelType::UnsignedInt8888Rev, HardwareFormat::B8G8R8A8Unorm),
    exact(PixelFormat::Rgba, PixelType::UnsignedByte, HardwareFormat::R8G8B8A8Unorm),
    exact(PixelFormat::AbgrExt, PixelType::UnsignedByte, HardwareFormat::A8B8G8R8Unorm),
    exact(PixelFormat::Bgra, PixelType::UnsignedByte, HardwareFormat::B8G8R8A8Unorm),
];

// RGBA/ABGR orderings are left out: the padded formats they would name are not negotiated here.
static RGBX8888: &[ExactFormatEntry] = &[
    exact(PixelFormat::Bgra, PixelType::UnsignedInt8888, HardwareFormat::X8R8G8B8Unorm),
    exact(PixelFormat::Bgra, PixelType::UnsignedInt8888Rev, HardwareFormat::B8G8R8X8Unorm),
    exact(PixelFormat::Bgra, PixelType::UnsignedByte, HardwareFormat::B8G8R8X8Unorm),
];

static RGBA1010102: &[ExactFormatEntry] = &[exact(
    PixelFormat::Bgra,
    PixelType::UnsignedInt2101010Rev,
    HardwareFormat::B10G10R10A2Unorm,
)];

/// Exact-match table selected by the requested internal format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExactBucket {
    Rgba8888,
    Rgbx8888,
    Rgba1010102,
}

impl ExactBucket {
    pub const ALL: [ExactBucket; 3] = [
        ExactBucket::Rgba8888,
        ExactBucket::Rgbx8888,
        ExactBucket::Rgba1010102,
    ];

    pub fn for_internal_format(internal_format: InternalFormat) -> Option<Self> {
        use InternalFormat::*;

        match internal_format {
            Components4 | Rgba | Rgba8 => Some(ExactBucket::Rgba8888),
            Components3 | Rgb | Rgb8 => Some(ExactBucket::Rgbx8888),
            Rgb10A2 => Some(ExactBucket::Rgba1010102),
            _ => None,
        }
    }

    pub fn entries(self) -> &'static [ExactFormatEntry] {
        match self {
            ExactBucket::Rgba8888 => RGBA8888,
            ExactBucket::Rgbx8888 => RGBX8888,
            ExactBucket::Rgba1010102 => RGBA1010102,
        }
    }
}

/// Hardware format whose memory layout is literally `(format, ty)` for `internal_format`.
///
/// Consults no oracle; the caller still has to check the result is supported.
pub fn find_exact_format(
    internal_format: InternalFormat,
    format: PixelFormat,
    ty: PixelType,
) -> Option<HardwareFormat> {
    let bucket = ExactBucket::for_internal_format(internal_format)?;
    bucket
        .entries()
        .iter()
        .find(|e| e.format == format && e.ty == ty)
        .map(|e| e.hardware)
}
