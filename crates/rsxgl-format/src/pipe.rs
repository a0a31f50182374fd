//! Hardware ("pipe") formats and the usage/target vocabulary of the capability oracle.
//!
//! The format list below is also the description table: each line names the layout, the physical
//! channels in memory order (least significant first), the swizzle for logical components
//! (`x y z w` select a channel, `0`/`1` are constants, `_` means absent) and the colorspace.

use bitflags::bitflags;

use crate::desc::{Channel, Colorspace, FormatDescription, FormatLayout, Swizzle};

const X8: Channel = Channel::void(8);
const X24: Channel = Channel::void(24);
const X32: Channel = Channel::void(32);
const X64: Channel = Channel::void(64);
const X128: Channel = Channel::void(128);

const UN1: Channel = Channel::unorm(1);
const UN2: Channel = Channel::unorm(2);
const UN3: Channel = Channel::unorm(3);
const UN4: Channel = Channel::unorm(4);
const UN5: Channel = Channel::unorm(5);
const UN6: Channel = Channel::unorm(6);
const UN8: Channel = Channel::unorm(8);
const UN10: Channel = Channel::unorm(10);
const UN16: Channel = Channel::unorm(16);
const UN24: Channel = Channel::unorm(24);
const UN32: Channel = Channel::unorm(32);

const SN8: Channel = Channel::snorm(8);
const SN16: Channel = Channel::snorm(16);
const SN32: Channel = Channel::snorm(32);

const UP2: Channel = Channel::uint(2);
const UP8: Channel = Channel::uint(8);
const UP10: Channel = Channel::uint(10);
const UP16: Channel = Channel::uint(16);
const UP32: Channel = Channel::uint(32);

const SP8: Channel = Channel::sint(8);
const SP16: Channel = Channel::sint(16);
const SP32: Channel = Channel::sint(32);

const F16: Channel = Channel::float(16);
const F32: Channel = Channel::float(32);
const F64: Channel = Channel::float(64);

macro_rules! swizzle {
    (x) => {
        Swizzle::X
    };
    (y) => {
        Swizzle::Y
    };
    (z) => {
        Swizzle::Z
    };
    (w) => {
        Swizzle::W
    };
    (0) => {
        Swizzle::Zero
    };
    (1) => {
        Swizzle::One
    };
    (_) => {
        Swizzle::None
    };
}

macro_rules! hardware_formats {
    ($(
        $variant:ident = $value:literal =>
            $layout:ident [$($ch:ident),*] ($s0:tt $s1:tt $s2:tt $s3:tt) $cs:ident,
    )+) => {
        raw_token_enum! {
            /// A concrete hardware pixel layout.
            ///
            /// Names list channels least significant first; `X` marks padding. Raw value 0 is
            /// reserved for "no format" and never decodes.
            pub enum HardwareFormat => UnknownHardwareFormat {
                $($variant = $value,)+
            }
        }

        impl HardwareFormat {
            /// Channel geometry for this format.
            pub fn description(self) -> &'static FormatDescription {
                match self {
                    $(HardwareFormat::$variant => {
                        const DESC: FormatDescription = FormatDescription::new(
                            HardwareFormat::$variant,
                            stringify!($variant),
                            FormatLayout::$layout,
                            &[$($ch),*],
                            [swizzle!($s0), swizzle!($s1), swizzle!($s2), swizzle!($s3)],
                            Colorspace::$cs,
                        );
                        &DESC
                    })+
                }
            }
        }
    };
}

hardware_formats! {
    // 8-bit per channel RGBA/BGRA orderings.
    B8G8R8A8Unorm = 1 => Plain [UN8, UN8, UN8, UN8] (z y x w) Rgb,
    B8G8R8X8Unorm = 2 => Plain [UN8, UN8, UN8, X8] (z y x 1) Rgb,
    A8R8G8B8Unorm = 3 => Plain [UN8, UN8, UN8, UN8] (y z w x) Rgb,
    X8R8G8B8Unorm = 4 => Plain [X8, UN8, UN8, UN8] (y z w 1) Rgb,
    A8B8G8R8Unorm = 5 => Plain [UN8, UN8, UN8, UN8] (w z y x) Rgb,
    X8B8G8R8Unorm = 6 => Plain [X8, UN8, UN8, UN8] (w z y 1) Rgb,
    R8G8B8A8Unorm = 7 => Plain [UN8, UN8, UN8, UN8] (x y z w) Rgb,
    R8G8B8X8Unorm = 8 => Plain [UN8, UN8, UN8, X8] (x y z 1) Rgb,

    // Packed sub-byte layouts.
    B5G5R5A1Unorm = 9 => Plain [UN5, UN5, UN5, UN1] (z y x w) Rgb,
    B4G4R4A4Unorm = 10 => Plain [UN4, UN4, UN4, UN4] (z y x w) Rgb,
    B5G6R5Unorm = 11 => Plain [UN5, UN6, UN5] (z y x 1) Rgb,
    B2G3R3Unorm = 12 => Plain [UN2, UN3, UN3] (z y x 1) Rgb,
    R10G10B10A2Unorm = 13 => Plain [UN10, UN10, UN10, UN2] (x y z w) Rgb,
    B10G10R10A2Unorm = 14 => Plain [UN10, UN10, UN10, UN2] (z y x w) Rgb,
    B10G10R10A2Uint = 15 => Plain [UP10, UP10, UP10, UP2] (z y x w) Rgb,
    R9G9B9E5Float = 16 => Other [X32] (x y z 1) Rgb,
    R11G11B10Float = 17 => Other [X32] (x y z 1) Rgb,

    // Luminance/alpha/intensity, normalized.
    L8Unorm = 18 => Plain [UN8] (x x x 1) Rgb,
    A8Unorm = 19 => Plain [UN8] (0 0 0 x) Rgb,
    I8Unorm = 20 => Plain [UN8] (x x x x) Rgb,
    L4A4Unorm = 21 => Plain [UN4, UN4] (x x x y) Rgb,
    L8A8Unorm = 22 => Plain [UN8, UN8] (x x x y) Rgb,
    L16Unorm = 23 => Plain [UN16] (x x x 1) Rgb,
    A16Unorm = 24 => Plain [UN16] (0 0 0 x) Rgb,
    I16Unorm = 25 => Plain [UN16] (x x x x) Rgb,
    L16A16Unorm = 26 => Plain [UN16, UN16] (x x x y) Rgb,
    A8Snorm = 27 => Plain [SN8] (0 0 0 x) Rgb,
    L8Snorm = 28 => Plain [SN8] (x x x 1) Rgb,
    L8A8Snorm = 29 => Plain [SN8, SN8] (x x x y) Rgb,
    I8Snorm = 30 => Plain [SN8] (x x x x) Rgb,
    A16Snorm = 31 => Plain [SN16] (0 0 0 x) Rgb,
    L16Snorm = 32 => Plain [SN16] (x x x 1) Rgb,
    L16A16Snorm = 33 => Plain [SN16, SN16] (x x x y) Rgb,
    I16Snorm = 34 => Plain [SN16] (x x x x) Rgb,

    // Luminance/alpha/intensity, float.
    A16Float = 35 => Plain [F16] (0 0 0 x) Rgb,
    L16Float = 36 => Plain [F16] (x x x 1) Rgb,
    L16A16Float = 37 => Plain [F16, F16] (x x x y) Rgb,
    I16Float = 38 => Plain [F16] (x x x x) Rgb,
    A32Float = 39 => Plain [F32] (0 0 0 x) Rgb,
    L32Float = 40 => Plain [F32] (x x x 1) Rgb,
    L32A32Float = 41 => Plain [F32, F32] (x x x y) Rgb,
    I32Float = 42 => Plain [F32] (x x x x) Rgb,

    // Luminance/alpha/intensity, integer.
    A8Uint = 43 => Plain [UP8] (0 0 0 x) Rgb,
    A16Uint = 44 => Plain [UP16] (0 0 0 x) Rgb,
    A32Uint = 45 => Plain [UP32] (0 0 0 x) Rgb,
    A8Sint = 46 => Plain [SP8] (0 0 0 x) Rgb,
    A16Sint = 47 => Plain [SP16] (0 0 0 x) Rgb,
    A32Sint = 48 => Plain [SP32] (0 0 0 x) Rgb,
    I8Uint = 49 => Plain [UP8] (x x x x) Rgb,
    I16Uint = 50 => Plain [UP16] (x x x x) Rgb,
    I32Uint = 51 => Plain [UP32] (x x x x) Rgb,
    I8Sint = 52 => Plain [SP8] (x x x x) Rgb,
    I16Sint = 53 => Plain [SP16] (x x x x) Rgb,
    I32Sint = 54 => Plain [SP32] (x x x x) Rgb,
    L8Uint = 55 => Plain [UP8] (x x x 1) Rgb,
    L16Uint = 56 => Plain [UP16] (x x x 1) Rgb,
    L32Uint = 57 => Plain [UP32] (x x x 1) Rgb,
    L8Sint = 58 => Plain [SP8] (x x x 1) Rgb,
    L16Sint = 59 => Plain [SP16] (x x x 1) Rgb,
    L32Sint = 60 => Plain [SP32] (x x x 1) Rgb,
    L8A8Uint = 61 => Plain [UP8, UP8] (x x x y) Rgb,
    L16A16Uint = 62 => Plain [UP16, UP16] (x x x y) Rgb,
    L32A32Uint = 63 => Plain [UP32, UP32] (x x x y) Rgb,
    L8A8Sint = 64 => Plain [SP8, SP8] (x x x y) Rgb,
    L16A16Sint = 65 => Plain [SP16, SP16] (x x x y) Rgb,
    L32A32Sint = 66 => Plain [SP32, SP32] (x x x y) Rgb,

    // R/RG/RGB/RGBA, normalized.
    R8Unorm = 67 => Plain [UN8] (x 0 0 1) Rgb,
    R8G8Unorm = 68 => Plain [UN8, UN8] (x y 0 1) Rgb,
    R8G8B8Unorm = 69 => Plain [UN8, UN8, UN8] (x y z 1) Rgb,
    R8Snorm = 70 => Plain [SN8] (x 0 0 1) Rgb,
    R8G8Snorm = 71 => Plain [SN8, SN8] (x y 0 1) Rgb,
    R8G8B8Snorm = 72 => Plain [SN8, SN8, SN8] (x y z 1) Rgb,
    R8G8B8A8Snorm = 73 => Plain [SN8, SN8, SN8, SN8] (x y z w) Rgb,
    R16Unorm = 74 => Plain [UN16] (x 0 0 1) Rgb,
    R16G16Unorm = 75 => Plain [UN16, UN16] (x y 0 1) Rgb,
    R16G16B16Unorm = 76 => Plain [UN16, UN16, UN16] (x y z 1) Rgb,
    R16G16B16A16Unorm = 77 => Plain [UN16, UN16, UN16, UN16] (x y z w) Rgb,
    R16Snorm = 78 => Plain [SN16] (x 0 0 1) Rgb,
    R16G16Snorm = 79 => Plain [SN16, SN16] (x y 0 1) Rgb,
    R16G16B16Snorm = 80 => Plain [SN16, SN16, SN16] (x y z 1) Rgb,
    R16G16B16A16Snorm = 81 => Plain [SN16, SN16, SN16, SN16] (x y z w) Rgb,
    R32Unorm = 82 => Plain [UN32] (x 0 0 1) Rgb,
    R32G32Unorm = 83 => Plain [UN32, UN32] (x y 0 1) Rgb,
    R32G32B32Unorm = 84 => Plain [UN32, UN32, UN32] (x y z 1) Rgb,
    R32G32B32A32Unorm = 85 => Plain [UN32, UN32, UN32, UN32] (x y z w) Rgb,
    R32Snorm = 86 => Plain [SN32] (x 0 0 1) Rgb,
    R32G32Snorm = 87 => Plain [SN32, SN32] (x y 0 1) Rgb,
    R32G32B32Snorm = 88 => Plain [SN32, SN32, SN32] (x y z 1) Rgb,
    R32G32B32A32Snorm = 89 => Plain [SN32, SN32, SN32, SN32] (x y z w) Rgb,

    // R/RG/RGB/RGBA, float.
    R16Float = 90 => Plain [F16] (x 0 0 1) Rgb,
    R16G16Float = 91 => Plain [F16, F16] (x y 0 1) Rgb,
    R16G16B16Float = 92 => Plain [F16, F16, F16] (x y z 1) Rgb,
    R16G16B16A16Float = 93 => Plain [F16, F16, F16, F16] (x y z w) Rgb,
    R32Float = 94 => Plain [F32] (x 0 0 1) Rgb,
    R32G32Float = 95 => Plain [F32, F32] (x y 0 1) Rgb,
    R32G32B32Float = 96 => Plain [F32, F32, F32] (x y z 1) Rgb,
    R32G32B32A32Float = 97 => Plain [F32, F32, F32, F32] (x y z w) Rgb,
    R64Float = 98 => Plain [F64] (x 0 0 1) Rgb,
    R64G64Float = 99 => Plain [F64, F64] (x y 0 1) Rgb,

    // R/RG/RGB/RGBA, integer.
    R8Uint = 100 => Plain [UP8] (x 0 0 1) Rgb,
    R8G8Uint = 101 => Plain [UP8, UP8] (x y 0 1) Rgb,
    R8G8B8Uint = 102 => Plain [UP8, UP8, UP8] (x y z 1) Rgb,
    R8G8B8A8Uint = 103 => Plain [UP8, UP8, UP8, UP8] (x y z w) Rgb,
    R8Sint = 104 => Plain [SP8] (x 0 0 1) Rgb,
    R8G8Sint = 105 => Plain [SP8, SP8] (x y 0 1) Rgb,
    R8G8B8Sint = 106 => Plain [SP8, SP8, SP8] (x y z 1) Rgb,
    R8G8B8A8Sint = 107 => Plain [SP8, SP8, SP8, SP8] (x y z w) Rgb,
    R16Uint = 108 => Plain [UP16] (x 0 0 1) Rgb,
    R16G16Uint = 109 => Plain [UP16, UP16] (x y 0 1) Rgb,
    R16G16B16Uint = 110 => Plain [UP16, UP16, UP16] (x y z 1) Rgb,
    R16G16B16A16Uint = 111 => Plain [UP16, UP16, UP16, UP16] (x y z w) Rgb,
    R16Sint = 112 => Plain [SP16] (x 0 0 1) Rgb,
    R16G16Sint = 113 => Plain [SP16, SP16] (x y 0 1) Rgb,
    R16G16B16Sint = 114 => Plain [SP16, SP16, SP16] (x y z 1) Rgb,
    R16G16B16A16Sint = 115 => Plain [SP16, SP16, SP16, SP16] (x y z w) Rgb,
    R32Uint = 116 => Plain [UP32] (x 0 0 1) Rgb,
    R32G32Uint = 117 => Plain [UP32, UP32] (x y 0 1) Rgb,
    R32G32B32Uint = 118 => Plain [UP32, UP32, UP32] (x y z 1) Rgb,
    R32G32B32A32Uint = 119 => Plain [UP32, UP32, UP32, UP32] (x y z w) Rgb,
    R32Sint = 120 => Plain [SP32] (x 0 0 1) Rgb,
    R32G32Sint = 121 => Plain [SP32, SP32] (x y 0 1) Rgb,
    R32G32B32Sint = 122 => Plain [SP32, SP32, SP32] (x y z 1) Rgb,
    R32G32B32A32Sint = 123 => Plain [SP32, SP32, SP32, SP32] (x y z w) Rgb,

    // sRGB.
    L8Srgb = 124 => Plain [UN8] (x x x 1) Srgb,
    L8A8Srgb = 125 => Plain [UN8, UN8] (x x x y) Srgb,
    B8G8R8A8Srgb = 126 => Plain [UN8, UN8, UN8, UN8] (z y x w) Srgb,
    A8R8G8B8Srgb = 127 => Plain [UN8, UN8, UN8, UN8] (y z w x) Srgb,
    A8B8G8R8Srgb = 128 => Plain [UN8, UN8, UN8, UN8] (w z y x) Srgb,

    // Depth/stencil.
    Z16Unorm = 129 => Plain [UN16] (x _ _ _) Zs,
    Z32Unorm = 130 => Plain [UN32] (x _ _ _) Zs,
    Z32Float = 131 => Plain [F32] (x _ _ _) Zs,
    Z24UnormS8Uint = 132 => Plain [UN24, UP8] (x y _ _) Zs,
    S8UintZ24Unorm = 133 => Plain [UP8, UN24] (y x _ _) Zs,
    Z24X8Unorm = 134 => Plain [UN24, X8] (x _ _ _) Zs,
    X8Z24Unorm = 135 => Plain [X8, UN24] (y _ _ _) Zs,
    S8Uint = 136 => Plain [UP8] (_ x _ _) Zs,
    Z32FloatS8X24Uint = 137 => Plain [F32, UP8, X24] (x y _ _) Zs,

    // YUV.
    Uyvy = 138 => Subsampled [X32] (x y z 1) Yuv,
    Yuyv = 139 => Subsampled [X32] (x y z 1) Yuv,
    Yv12 = 140 => Other [X8, X8, X8, X8] (x y z w) Yuv,
    Yv16 = 141 => Other [X8, X8, X8, X8] (x y z w) Yuv,
    Iyuv = 142 => Other [X8, X8, X8, X8] (x y z w) Yuv,
    Nv12 = 143 => Other [X8, X8, X8, X8] (x y z w) Yuv,
    Nv21 = 144 => Other [X8, X8, X8, X8] (x y z w) Yuv,

    // Block compressed.
    Dxt1Rgb = 145 => S3tc [X64] (x y z 1) Rgb,
    Dxt1Rgba = 146 => S3tc [X64] (x y z w) Rgb,
    Dxt3Rgba = 147 => S3tc [X128] (x y z w) Rgb,
    Dxt5Rgba = 148 => S3tc [X128] (x y z w) Rgb,
    Dxt1Srgb = 149 => S3tc [X64] (x y z 1) Srgb,
    Dxt1Srgba = 150 => S3tc [X64] (x y z w) Srgb,
    Dxt3Srgba = 151 => S3tc [X128] (x y z w) Srgb,
    Dxt5Srgba = 152 => S3tc [X128] (x y z w) Srgb,
    Rgtc1Unorm = 153 => Rgtc [X64] (x 0 0 1) Rgb,
    Rgtc1Snorm = 154 => Rgtc [X64] (x 0 0 1) Rgb,
    Rgtc2Unorm = 155 => Rgtc [X128] (x y 0 1) Rgb,
    Rgtc2Snorm = 156 => Rgtc [X128] (x y 0 1) Rgb,
    Latc1Unorm = 157 => Rgtc [X64] (x x x 1) Rgb,
    Latc1Snorm = 158 => Rgtc [X64] (x x x 1) Rgb,
    Latc2Unorm = 159 => Rgtc [X128] (x x x y) Rgb,
    Latc2Snorm = 160 => Rgtc [X128] (x x x y) Rgb,
    Etc1Rgb8 = 161 => Etc [X64] (x y z 1) Rgb,
}

impl HardwareFormat {
    pub fn name(self) -> &'static str {
        self.description().name
    }

    pub fn is_depth_or_stencil(self) -> bool {
        self.description().is_depth_or_stencil()
    }

    pub fn is_compressed(self) -> bool {
        self.description().is_compressed()
    }
}

raw_token_enum! {
    /// Texture dimensionality class passed through to the capability oracle.
    pub enum TextureTarget => UnknownTextureTarget {
        Buffer = 0,
        Texture1D = 1,
        Texture2D = 2,
        Texture3D = 3,
        TextureCube = 4,
        TextureRect = 5,
        Texture1DArray = 6,
        Texture2DArray = 7,
    }
}

bitflags! {
    /// Intended hardware usages of a resource.
    ///
    /// Sampling-only requests normally carry `SAMPLER_VIEW`; render-to-texture adds
    /// `RENDER_TARGET` or `DEPTH_STENCIL`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BindFlags: u32 {
        const DEPTH_STENCIL = 1 << 0;
        const RENDER_TARGET = 1 << 1;
        const BLENDABLE = 1 << 2;
        const SAMPLER_VIEW = 1 << 3;
        const VERTEX_BUFFER = 1 << 4;
        const INDEX_BUFFER = 1 << 5;
        const CONSTANT_BUFFER = 1 << 6;
        const DISPLAY_TARGET = 1 << 8;
        const TRANSFER_WRITE = 1 << 9;
        const TRANSFER_READ = 1 << 10;
        const SCANOUT = 1 << 14;
        const SHARED = 1 << 15;
    }
}
