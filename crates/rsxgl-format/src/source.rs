use crate::gl::{PixelFormat, PixelType};
use crate::pipe::HardwareFormat;

/// Hardware format describing client memory laid out as `(format, ty)`.
///
/// Used to wrap upload data as a transfer source; no capability check is involved. Returns
/// `None` for combinations with no direct hardware equivalent.
pub fn choose_source_format(format: PixelFormat, ty: PixelType) -> Option<HardwareFormat> {
    use HardwareFormat as Hw;
    use PixelFormat as F;
    use PixelType as T;

    let hw = match (format, ty) {
        (F::Red, T::UnsignedByte) => Hw::R8Unorm,
        (F::Red, T::Byte) => Hw::R8Snorm,
        (F::Red, T::UnsignedShort) => Hw::R16Unorm,
        (F::Red, T::Short) => Hw::R16Snorm,
        (F::Red, T::UnsignedInt) => Hw::R32Unorm,
        (F::Red, T::Int) => Hw::R32Snorm,
        (F::Red, T::Float) => Hw::R32Float,

        (F::Rg, T::UnsignedByte) => Hw::R8G8Unorm,
        (F::Rg, T::Byte) => Hw::R8G8Snorm,
        (F::Rg, T::UnsignedShort) => Hw::R16G16Unorm,
        (F::Rg, T::Short) => Hw::R16G16Snorm,
        (F::Rg, T::UnsignedInt) => Hw::R32G32Unorm,
        (F::Rg, T::Int) => Hw::R32G32Snorm,
        (F::Rg, T::Float) => Hw::R32G32Float,

        (F::Rgb, T::UnsignedByte) => Hw::R8G8B8Unorm,
        (F::Rgb, T::Byte) => Hw::R8G8B8Snorm,
        (F::Rgb, T::UnsignedShort) => Hw::R16G16B16Unorm,
        (F::Rgb, T::Short) => Hw::R16G16B16Snorm,
        (F::Rgb, T::UnsignedInt) => Hw::R32G32B32Unorm,
        (F::Rgb, T::Int) => Hw::R32G32B32Snorm,
        (F::Rgb, T::Float) => Hw::R32G32B32Float,

        (F::Bgr, T::UnsignedByte) => Hw::X8R8G8B8Unorm,

        (F::Rgba, T::UnsignedByte) => Hw::R8G8B8A8Unorm,
        (F::Rgba, T::UnsignedInt8888) => Hw::A8B8G8R8Unorm,
        (F::Rgba, T::UnsignedInt8888Rev) => Hw::R8G8B8A8Unorm,
        (F::Rgba, T::Byte) => Hw::R8G8B8A8Snorm,
        (F::Rgba, T::UnsignedShort) => Hw::R16G16B16A16Unorm,
        (F::Rgba, T::Short) => Hw::R16G16B16A16Snorm,
        (F::Rgba, T::UnsignedInt) => Hw::R32G32B32A32Unorm,
        (F::Rgba, T::Int) => Hw::R32G32B32A32Snorm,
        (F::Rgba, T::Float) => Hw::R32G32B32A32Float,

        (F::Bgra, T::UnsignedByte) => Hw::A8R8G8B8Unorm,

        (F::Alpha, T::UnsignedByte) => Hw::A8Unorm,
        (F::Alpha, T::Byte) => Hw::A8Snorm,

        (F::Luminance, T::UnsignedByte) => Hw::L8Unorm,
        (F::Luminance, T::Byte) => Hw::L8Snorm,

        _ => return None,
    };
    Some(hw)
}
