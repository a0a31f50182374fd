//! GL-side format tokens.
//!
//! These are the values a client hands to `glTexImage*`/`glRenderbufferStorage`: the requested
//! internal format plus the optional external pixel layout (`format`) and datatype (`type`) of
//! the data being uploaded. Raw values match the GL headers.

/// `GL_NONE`. Raw entry points treat it as "no external format/type specified".
pub const GL_NONE: u32 = 0;

raw_token_enum! {
    /// A GL internal format request.
    ///
    /// Covers every token the preference and exact-match tables know about, plus the legacy
    /// component counts `3` and `4` accepted by `glTexImage*`.
    pub enum InternalFormat => UnknownInternalFormat {
        /// Legacy `internalFormat = 3`.
        Components3 = 3,
        /// Legacy `internalFormat = 4`.
        Components4 = 4,

        // Unsized base formats.
        StencilIndex = 0x1901,
        DepthComponent = 0x1902,
        Red = 0x1903,
        Alpha = 0x1906,
        Rgb = 0x1907,
        Rgba = 0x1908,
        Luminance = 0x1909,
        LuminanceAlpha = 0x190A,
        Bgra = 0x80E1,
        Rg = 0x8227,

        // Sized fixed-point formats.
        R3G3B2 = 0x2A10,
        Alpha4 = 0x803B,
        Alpha8 = 0x803C,
        Alpha12 = 0x803D,
        Alpha16 = 0x803E,
        Luminance4 = 0x803F,
        Luminance8 = 0x8040,
        Luminance12 = 0x8041,
        Luminance16 = 0x8042,
        Luminance4Alpha4 = 0x8043,
        Luminance6Alpha2 = 0x8044,
        Luminance8Alpha8 = 0x8045,
        Luminance12Alpha4 = 0x8046,
        Luminance12Alpha12 = 0x8047,
        Luminance16Alpha16 = 0x8048,
        Intensity = 0x8049,
        Intensity4 = 0x804A,
        Intensity8 = 0x804B,
        Intensity12 = 0x804C,
        Intensity16 = 0x804D,
        Rgb4 = 0x804F,
        Rgb5 = 0x8050,
        Rgb8 = 0x8051,
        Rgb10 = 0x8052,
        Rgb12 = 0x8053,
        Rgb16 = 0x8054,
        Rgba2 = 0x8055,
        Rgba4 = 0x8056,
        Rgb5A1 = 0x8057,
        Rgba8 = 0x8058,
        Rgb10A2 = 0x8059,
        Rgba12 = 0x805A,
        Rgba16 = 0x805B,
        R8 = 0x8229,
        R16 = 0x822A,
        Rg8 = 0x822B,
        Rg16 = 0x822C,

        // Generic and S3TC compressed formats.
        RgbS3tc = 0x83A0,
        Rgb4S3tc = 0x83A1,
        RgbaS3tc = 0x83A2,
        Rgba4S3tc = 0x83A3,
        CompressedRgbS3tcDxt1 = 0x83F0,
        CompressedRgbaS3tcDxt1 = 0x83F1,
        CompressedRgbaS3tcDxt3 = 0x83F2,
        CompressedRgbaS3tcDxt5 = 0x83F3,
        CompressedAlpha = 0x84E9,
        CompressedLuminance = 0x84EA,
        CompressedLuminanceAlpha = 0x84EB,
        CompressedIntensity = 0x84EC,
        CompressedRgb = 0x84ED,
        CompressedRgba = 0x84EE,
        CompressedRed = 0x8225,
        CompressedRg = 0x8226,
        CompressedRedRgtc1 = 0x8DBB,
        CompressedSignedRedRgtc1 = 0x8DBC,
        CompressedRgRgtc2 = 0x8DBD,
        CompressedSignedRgRgtc2 = 0x8DBE,
        CompressedLuminanceLatc1 = 0x8C70,
        CompressedSignedLuminanceLatc1 = 0x8C71,
        CompressedLuminanceAlphaLatc2 = 0x8C72,
        CompressedSignedLuminanceAlphaLatc2 = 0x8C73,
        CompressedLuminanceAlpha3dcAti = 0x8837,
        Etc1Rgb8 = 0x8D64,

        // YCbCr.
        YcbcrMesa = 0x8757,

        // Depth and stencil.
        DepthComponent16 = 0x81A5,
        DepthComponent24 = 0x81A6,
        DepthComponent32 = 0x81A7,
        DepthStencil = 0x84F9,
        Depth24Stencil8 = 0x88F0,
        DepthComponent32F = 0x8CAC,
        Depth32FStencil8 = 0x8CAD,
        StencilIndex1 = 0x8D46,
        StencilIndex4 = 0x8D47,
        StencilIndex8 = 0x8D48,
        StencilIndex16 = 0x8D49,

        // sRGB.
        Srgb = 0x8C40,
        Srgb8 = 0x8C41,
        SrgbAlpha = 0x8C42,
        Srgb8Alpha8 = 0x8C43,
        SluminanceAlpha = 0x8C44,
        Sluminance8Alpha8 = 0x8C45,
        Sluminance = 0x8C46,
        Sluminance8 = 0x8C47,
        CompressedSrgb = 0x8C48,
        CompressedSrgbAlpha = 0x8C49,
        CompressedSluminance = 0x8C4A,
        CompressedSluminanceAlpha = 0x8C4B,
        CompressedSrgbS3tcDxt1 = 0x8C4C,
        CompressedSrgbAlphaS3tcDxt1 = 0x8C4D,
        CompressedSrgbAlphaS3tcDxt3 = 0x8C4E,
        CompressedSrgbAlphaS3tcDxt5 = 0x8C4F,

        // Floating point.
        Rgba32F = 0x8814,
        Rgb32F = 0x8815,
        Alpha32F = 0x8816,
        Intensity32F = 0x8817,
        Luminance32F = 0x8818,
        LuminanceAlpha32F = 0x8819,
        Rgba16F = 0x881A,
        Rgb16F = 0x881B,
        Alpha16F = 0x881C,
        Intensity16F = 0x881D,
        Luminance16F = 0x881E,
        LuminanceAlpha16F = 0x881F,
        R16F = 0x822D,
        R32F = 0x822E,
        Rg16F = 0x822F,
        Rg32F = 0x8230,
        R11FG11FB10F = 0x8C3A,
        Rgb9E5 = 0x8C3D,

        // Integer.
        R8I = 0x8231,
        R8UI = 0x8232,
        R16I = 0x8233,
        R16UI = 0x8234,
        R32I = 0x8235,
        R32UI = 0x8236,
        Rg8I = 0x8237,
        Rg8UI = 0x8238,
        Rg16I = 0x8239,
        Rg16UI = 0x823A,
        Rg32I = 0x823B,
        Rg32UI = 0x823C,
        Rgba32UI = 0x8D70,
        Rgb32UI = 0x8D71,
        Alpha32UI = 0x8D72,
        Intensity32UI = 0x8D73,
        Luminance32UI = 0x8D74,
        LuminanceAlpha32UI = 0x8D75,
        Rgba16UI = 0x8D76,
        Rgb16UI = 0x8D77,
        Alpha16UI = 0x8D78,
        Intensity16UI = 0x8D79,
        Luminance16UI = 0x8D7A,
        LuminanceAlpha16UI = 0x8D7B,
        Rgba8UI = 0x8D7C,
        Rgb8UI = 0x8D7D,
        Alpha8UI = 0x8D7E,
        Intensity8UI = 0x8D7F,
        Luminance8UI = 0x8D80,
        LuminanceAlpha8UI = 0x8D81,
        Rgba32I = 0x8D82,
        Rgb32I = 0x8D83,
        Alpha32I = 0x8D84,
        Intensity32I = 0x8D85,
        Luminance32I = 0x8D86,
        LuminanceAlpha32I = 0x8D87,
        Rgba16I = 0x8D88,
        Rgb16I = 0x8D89,
        Alpha16I = 0x8D8A,
        Intensity16I = 0x8D8B,
        Luminance16I = 0x8D8C,
        LuminanceAlpha16I = 0x8D8D,
        Rgba8I = 0x8D8E,
        Rgb8I = 0x8D8F,
        Alpha8I = 0x8D90,
        Intensity8I = 0x8D91,
        Luminance8I = 0x8D92,
        LuminanceAlpha8I = 0x8D93,
        RedInteger = 0x8D94,
        GreenInteger = 0x8D95,
        BlueInteger = 0x8D96,
        AlphaInteger = 0x8D97,
        RgbInteger = 0x8D98,
        RgbaInteger = 0x8D99,
        BgrInteger = 0x8D9A,
        BgraInteger = 0x8D9B,
        LuminanceInteger = 0x8D9C,
        LuminanceAlphaInteger = 0x8D9D,
        Rgb10A2UI = 0x906F,

        // Signed normalized.
        RedSnorm = 0x8F90,
        RgSnorm = 0x8F91,
        RgbSnorm = 0x8F92,
        RgbaSnorm = 0x8F93,
        R8Snorm = 0x8F94,
        Rg8Snorm = 0x8F95,
        Rgb8Snorm = 0x8F96,
        Rgba8Snorm = 0x8F97,
        R16Snorm = 0x8F98,
        Rg16Snorm = 0x8F99,
        Rgb16Snorm = 0x8F9A,
        Rgba16Snorm = 0x8F9B,
        AlphaSnorm = 0x9010,
        LuminanceSnorm = 0x9011,
        LuminanceAlphaSnorm = 0x9012,
        IntensitySnorm = 0x9013,
        Alpha8Snorm = 0x9014,
        Luminance8Snorm = 0x9015,
        Luminance8Alpha8Snorm = 0x9016,
        Intensity8Snorm = 0x9017,
        Alpha16Snorm = 0x9018,
        Luminance16Snorm = 0x9019,
        Luminance16Alpha16Snorm = 0x901A,
        Intensity16Snorm = 0x901B,
    }
}

raw_token_enum! {
    /// External pixel layout of client data (the `format` argument of `glTexImage*`).
    pub enum PixelFormat => UnknownPixelFormat {
        Red = 0x1903,
        Alpha = 0x1906,
        Rgb = 0x1907,
        Rgba = 0x1908,
        Luminance = 0x1909,
        LuminanceAlpha = 0x190A,
        AbgrExt = 0x8000,
        Bgr = 0x80E0,
        Bgra = 0x80E1,
        Rg = 0x8227,
    }
}

raw_token_enum! {
    /// External datatype of client data (the `type` argument of `glTexImage*`).
    ///
    /// Also used as the basic element type reported by [`crate::format_datatype`].
    pub enum PixelType => UnknownPixelType {
        Byte = 0x1400,
        UnsignedByte = 0x1401,
        Short = 0x1402,
        UnsignedShort = 0x1403,
        Int = 0x1404,
        UnsignedInt = 0x1405,
        Float = 0x1406,
        Double = 0x140A,
        HalfFloat = 0x140B,
        UnsignedInt8888 = 0x8035,
        UnsignedInt1010102 = 0x8036,
        UnsignedInt8888Rev = 0x8367,
        UnsignedInt2101010Rev = 0x8368,
        UnsignedInt24_8 = 0x84FA,
        Float32UnsignedInt24_8Rev = 0x8DAD,
    }
}
