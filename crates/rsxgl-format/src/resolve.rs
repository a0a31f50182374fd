//! Format negotiation and format introspection.
//!
//! Negotiation runs in two stages. If the client described the bytes it is uploading, the
//! exact-match buckets may name a hardware format with that literal layout; the oracle gets one
//! chance to accept it. Otherwise (or on rejection) the first preference entry listing the
//! internal format is walked in order and the first candidate the oracle accepts wins.

use tracing::{debug, trace};

use crate::caps::FormatCapabilities;
use crate::config::ResolverConfig;
use crate::desc::{ChannelType, Colorspace, FormatDescription};
use crate::gl::{InternalFormat, PixelFormat, PixelType};
use crate::pipe::{BindFlags, HardwareFormat, TextureTarget};
use crate::table::{find_exact_format, find_preference_entry, FORMAT_MAP};

/// Everything the resolver needs to know about a texture or surface allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatRequest {
    pub internal_format: InternalFormat,
    /// External layout of the client data, if any.
    pub format: Option<PixelFormat>,
    /// External datatype of the client data, if any.
    pub ty: Option<PixelType>,
    pub target: TextureTarget,
    pub sample_count: u32,
    pub bindings: BindFlags,
}

impl FormatRequest {
    /// A sampled 2D texture with no client data description.
    pub fn new(internal_format: InternalFormat) -> Self {
        Self {
            internal_format,
            format: None,
            ty: None,
            target: TextureTarget::Texture2D,
            sample_count: 1,
            bindings: BindFlags::SAMPLER_VIEW,
        }
    }

    pub fn with_external(mut self, format: PixelFormat, ty: PixelType) -> Self {
        self.format = Some(format);
        self.ty = Some(ty);
        self
    }

    pub fn with_format(mut self, format: Option<PixelFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_type(mut self, ty: Option<PixelType>) -> Self {
        self.ty = ty;
        self
    }

    pub fn with_target(mut self, target: TextureTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_bindings(mut self, bindings: BindFlags) -> Self {
        self.bindings = bindings;
        self
    }

    fn supported_by<O>(&self, oracle: &O, format: HardwareFormat) -> bool
    where
        O: FormatCapabilities + ?Sized,
    {
        oracle.is_format_supported(format, self.target, self.sample_count, self.bindings)
    }
}

/// Stateless format negotiator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatResolver {
    config: ResolverConfig,
}

impl FormatResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolver configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(ResolverConfig::from_env())
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Picks the hardware format to allocate for `req`, or `None` if nothing acceptable exists.
    ///
    /// The oracle is asked at most once per candidate.
    pub fn choose_format<O>(&self, req: &FormatRequest, oracle: &O) -> Option<HardwareFormat>
    where
        O: FormatCapabilities + ?Sized,
    {
        if self.config.exact_match {
            if let Some(chosen) = self.choose_exact(req, oracle) {
                debug!(
                    internal_format = ?req.internal_format,
                    format = ?req.format,
                    ty = ?req.ty,
                    target = ?req.target,
                    sample_count = req.sample_count,
                    bindings = ?req.bindings,
                    chosen = ?chosen,
                    "exact format match"
                );
                return Some(chosen);
            }
        }

        let Some(entry) = find_preference_entry(req.internal_format) else {
            debug!(
                internal_format = ?req.internal_format,
                "internal format has no preference entry"
            );
            return None;
        };

        let chosen = entry.candidates.iter().copied().find(|&candidate| {
            let supported = req.supported_by(oracle, candidate);
            if !supported {
                trace!(candidate = ?candidate, "candidate rejected");
            }
            supported
        });

        match chosen {
            Some(chosen) => debug!(
                internal_format = ?req.internal_format,
                target = ?req.target,
                sample_count = req.sample_count,
                bindings = ?req.bindings,
                chosen = ?chosen,
                "preference table match"
            ),
            None => debug!(
                internal_format = ?req.internal_format,
                target = ?req.target,
                sample_count = req.sample_count,
                bindings = ?req.bindings,
                candidates = entry.candidates.len(),
                "no supported format"
            ),
        }
        chosen
    }

    fn choose_exact<O>(&self, req: &FormatRequest, oracle: &O) -> Option<HardwareFormat>
    where
        O: FormatCapabilities + ?Sized,
    {
        let (format, ty) = req.format.zip(req.ty)?;
        let exact = find_exact_format(req.internal_format, format, ty)?;
        if req.supported_by(oracle, exact) {
            Some(exact)
        } else {
            trace!(candidate = ?exact, "exact candidate rejected, falling back to preference table");
            None
        }
    }
}

/// [`FormatResolver::choose_format`] with the default configuration.
pub fn choose_format<O>(oracle: &O, req: &FormatRequest) -> Option<HardwareFormat>
where
    O: FormatCapabilities + ?Sized,
{
    FormatResolver::default().choose_format(req, oracle)
}

/// Negotiates from raw GL/pipe values.
///
/// Unknown internal formats and targets resolve to `None`. An external format or type that is
/// `GL_NONE` or unrecognised counts as absent, which skips the exact-match stage. Unknown bind
/// bits are passed to the oracle untouched.
pub fn choose_format_raw<O>(
    oracle: &O,
    internal_format: u32,
    format: u32,
    ty: u32,
    target: u32,
    sample_count: u32,
    bindings: u32,
) -> Option<HardwareFormat>
where
    O: FormatCapabilities + ?Sized,
{
    let internal = match InternalFormat::try_from(internal_format) {
        Ok(internal) => internal,
        Err(err) => {
            debug!(%err, "format negotiation skipped");
            return None;
        }
    };
    let target = match TextureTarget::try_from(target) {
        Ok(target) => target,
        Err(err) => {
            debug!(%err, "format negotiation skipped");
            return None;
        }
    };

    let req = FormatRequest::new(internal)
        .with_format(PixelFormat::from_raw(format))
        .with_type(PixelType::from_raw(ty))
        .with_target(target)
        .with_sample_count(sample_count)
        .with_bindings(BindFlags::from_bits_retain(bindings));
    choose_format(oracle, &req)
}

/// Canonical GL internal format for a hardware format.
///
/// Lossy: only preference entries whose first candidate is `hw` are considered, and the first
/// such entry's first alias is returned.
pub fn internal_format_of(hw: HardwareFormat) -> Option<InternalFormat> {
    FORMAT_MAP
        .iter()
        .find(|entry| entry.primary_candidate() == Some(hw))
        .and_then(|entry| entry.primary_internal_format())
}

/// Bits in color component `channel` (0..=3 is R, G, B, A).
///
/// Zero for depth/stencil formats, non-plain layouts, and components the format does not store.
pub fn color_channel_bit_depth(hw: HardwareFormat, channel: usize) -> u32 {
    let desc = hw.description();
    if desc.is_depth_or_stencil() {
        return 0;
    }
    plain_component_bits(desc, channel)
}

/// Bits in depth/stencil component `channel` (0 is depth, 1 is stencil).
///
/// Zero for color formats and components the format does not store.
pub fn depth_channel_bit_depth(hw: HardwareFormat, channel: usize) -> u32 {
    let desc = hw.description();
    if !desc.is_depth_or_stencil() {
        return 0;
    }
    plain_component_bits(desc, channel)
}

fn plain_component_bits(desc: &FormatDescription, channel: usize) -> u32 {
    if !desc.is_plain() {
        return 0;
    }
    desc.component_channel(channel).map_or(0, |c| c.size)
}

/// Basic GL element type used to move a texel of `hw` between client and device.
///
/// `None` for compressed formats and layouts with no sensible element type.
pub fn format_datatype(hw: HardwareFormat) -> Option<PixelType> {
    use HardwareFormat::*;

    match hw {
        B5G5R5A1Unorm | B5G6R5Unorm => return Some(PixelType::UnsignedShort),
        R11G11B10Float | R9G9B9E5Float => return Some(PixelType::Float),
        Z24UnormS8Uint | S8UintZ24Unorm | Z24X8Unorm | X8Z24Unorm => {
            return Some(PixelType::UnsignedInt24_8)
        }
        Z32FloatS8X24Uint => return Some(PixelType::Float32UnsignedInt24_8Rev),
        _ => {}
    }

    let desc = hw.description();
    if desc.is_plain() {
        plain_datatype(desc)
    } else if desc.is_yuv() {
        Some(PixelType::UnsignedShort)
    } else {
        None
    }
}

fn plain_datatype(desc: &FormatDescription) -> Option<PixelType> {
    let channel = desc.first_non_void_channel()?;
    let size = max_component_bits(desc);

    let ty = match (size, channel.ty) {
        (8, ChannelType::Unsigned) => PixelType::UnsignedByte,
        (8, _) => PixelType::Byte,
        (16, ChannelType::Float) => PixelType::HalfFloat,
        (16, ChannelType::Unsigned) => PixelType::UnsignedShort,
        (16, _) => PixelType::Short,
        (0..=32, ChannelType::Float) => PixelType::Float,
        (0..=32, ChannelType::Unsigned) => PixelType::UnsignedInt,
        (0..=32, _) => PixelType::Int,
        (64, ChannelType::Float) => PixelType::Double,
        _ => return None,
    };
    Some(ty)
}

/// Widest RGB or depth/stencil component. Other colorspaces, sRGB included, measure 0.
fn max_component_bits(desc: &FormatDescription) -> u32 {
    let color_bits = (0..4).map(|c| desc.component_bits(Colorspace::Rgb, c));
    let zs_bits = (0..2).map(|c| desc.component_bits(Colorspace::Zs, c));
    color_bits.chain(zs_bits).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::caps::SupportedFormats;

    fn only(formats: &[HardwareFormat]) -> SupportedFormats {
        formats.iter().copied().collect()
    }

    #[test]
    fn request_defaults() {
        let req = FormatRequest::new(InternalFormat::Rgba8);
        assert_eq!(req.format, None);
        assert_eq!(req.ty, None);
        assert_eq!(req.target, TextureTarget::Texture2D);
        assert_eq!(req.sample_count, 1);
        assert_eq!(req.bindings, BindFlags::SAMPLER_VIEW);
    }

    #[test]
    fn exact_stage_needs_both_external_tokens() {
        let caps = only(&[HardwareFormat::A8B8G8R8Unorm, HardwareFormat::B8G8R8A8Unorm]);
        let req = FormatRequest::new(InternalFormat::Rgba)
            .with_format(Some(PixelFormat::AbgrExt))
            .with_type(None);
        // Without a type the exact bucket is skipped and the preference chain decides.
        assert_eq!(choose_format(&caps, &req), Some(HardwareFormat::B8G8R8A8Unorm));

        let req = req.with_type(Some(PixelType::UnsignedByte));
        assert_eq!(choose_format(&caps, &req), Some(HardwareFormat::A8B8G8R8Unorm));
    }

    #[test]
    fn disabled_exact_stage_uses_preference_table() {
        let caps = only(&[HardwareFormat::A8B8G8R8Unorm, HardwareFormat::B8G8R8A8Unorm]);
        let req = FormatRequest::new(InternalFormat::Rgba)
            .with_external(PixelFormat::AbgrExt, PixelType::UnsignedByte);
        let resolver = FormatResolver::new(ResolverConfig::default().with_exact_match(false));
        assert_eq!(
            resolver.choose_format(&req, &caps),
            Some(HardwareFormat::B8G8R8A8Unorm)
        );
    }

    #[test]
    fn rejected_exact_candidate_is_not_retried() {
        let calls = RefCell::new(Vec::new());
        let oracle = |f: HardwareFormat, _: TextureTarget, _: u32, _: BindFlags| {
            calls.borrow_mut().push(f);
            f == HardwareFormat::B8G8R8A8Unorm
        };
        let req = FormatRequest::new(InternalFormat::Rgba8)
            .with_external(PixelFormat::Rgba, PixelType::UnsignedByte);

        assert_eq!(choose_format(&oracle, &req), Some(HardwareFormat::B8G8R8A8Unorm));
        // Exact stage asks about R8G8B8A8, then the preference walk asks again as its own
        // first candidate: two stages, one question each.
        assert_eq!(
            calls.into_inner(),
            vec![
                HardwareFormat::R8G8B8A8Unorm,
                HardwareFormat::R8G8B8A8Unorm,
                HardwareFormat::B8G8R8A8Unorm,
            ]
        );
    }

    #[test]
    fn request_parameters_reach_the_oracle() {
        let oracle = |_: HardwareFormat, target: TextureTarget, samples: u32, bindings: BindFlags| {
            target == TextureTarget::TextureCube
                && samples == 4
                && bindings == BindFlags::RENDER_TARGET | BindFlags::SAMPLER_VIEW
        };
        let req = FormatRequest::new(InternalFormat::Rgb)
            .with_target(TextureTarget::TextureCube)
            .with_sample_count(4)
            .with_bindings(BindFlags::RENDER_TARGET | BindFlags::SAMPLER_VIEW);
        assert_eq!(choose_format(&oracle, &req), Some(HardwareFormat::R8G8B8X8Unorm));
        assert_eq!(choose_format(&oracle, &req.with_sample_count(1)), None);
    }

    #[test]
    fn raw_entry_point_degrades_unknown_tokens() {
        let caps = SupportedFormats::all();
        // Unknown internal format.
        assert_eq!(choose_format_raw(&caps, 0xdead, 0, 0, 2, 1, 8), None);
        // Unknown target.
        assert_eq!(choose_format_raw(&caps, 0x8058, 0, 0, 99, 1, 8), None);
        // Unknown external type counts as absent.
        assert_eq!(
            choose_format_raw(&caps, 0x1908, 0x80E1, 0xbeef, 2, 1, 8),
            Some(HardwareFormat::R8G8B8A8Unorm)
        );
        // BGRA + UNSIGNED_BYTE hits the exact bucket.
        assert_eq!(
            choose_format_raw(&caps, 0x1908, 0x80E1, 0x1401, 2, 1, 8),
            Some(HardwareFormat::B8G8R8A8Unorm)
        );
    }

    #[test]
    fn inverse_lookup_returns_first_alias() {
        assert_eq!(
            internal_format_of(HardwareFormat::R8G8B8A8Unorm),
            Some(InternalFormat::Rgba)
        );
        assert_eq!(
            internal_format_of(HardwareFormat::B10G10R10A2Unorm),
            Some(InternalFormat::Rgb10)
        );
        // Only reachable as a fallback, never a first candidate.
        assert_eq!(internal_format_of(HardwareFormat::A8R8G8B8Unorm), None);
        // Depth chain entry has Z24X8 first; the earlier DEPTH_COMPONENT24 entry wins.
        assert_eq!(
            internal_format_of(HardwareFormat::Z24X8Unorm),
            Some(InternalFormat::DepthComponent24)
        );
    }

    #[test]
    fn color_bit_depths() {
        let hw = HardwareFormat::B5G6R5Unorm;
        assert_eq!(
            (0..4).map(|c| color_channel_bit_depth(hw, c)).collect::<Vec<_>>(),
            vec![5, 6, 5, 0]
        );
        assert_eq!(color_channel_bit_depth(HardwareFormat::A8Unorm, 3), 8);
        assert_eq!(color_channel_bit_depth(HardwareFormat::A8Unorm, 0), 0);
        assert_eq!(color_channel_bit_depth(HardwareFormat::R8G8B8A8Unorm, 4), 0);
        assert_eq!(color_channel_bit_depth(HardwareFormat::Dxt1Rgb, 0), 0);
        assert_eq!(color_channel_bit_depth(HardwareFormat::Z16Unorm, 0), 0);
    }

    #[test]
    fn depth_stencil_formats_have_no_color_bits() {
        let zs: Vec<_> = HardwareFormat::ALL
            .iter()
            .copied()
            .filter(|hw| hw.is_depth_or_stencil())
            .collect();
        assert!(zs.contains(&HardwareFormat::Z24UnormS8Uint));
        assert!(zs.contains(&HardwareFormat::S8Uint));
        for hw in zs {
            for channel in 0..4 {
                assert_eq!(color_channel_bit_depth(hw, channel), 0, "{hw:?} channel {channel}");
            }
        }
    }

    #[test]
    fn depth_bit_depths() {
        assert_eq!(depth_channel_bit_depth(HardwareFormat::Z24UnormS8Uint, 0), 24);
        assert_eq!(depth_channel_bit_depth(HardwareFormat::Z24UnormS8Uint, 1), 8);
        assert_eq!(depth_channel_bit_depth(HardwareFormat::S8UintZ24Unorm, 0), 24);
        assert_eq!(depth_channel_bit_depth(HardwareFormat::Z24X8Unorm, 1), 0);
        assert_eq!(depth_channel_bit_depth(HardwareFormat::Z32FloatS8X24Uint, 0), 32);
        assert_eq!(depth_channel_bit_depth(HardwareFormat::R8G8B8A8Unorm, 0), 0);
    }

    #[test]
    fn datatype_overrides() {
        assert_eq!(format_datatype(HardwareFormat::B5G6R5Unorm), Some(PixelType::UnsignedShort));
        assert_eq!(format_datatype(HardwareFormat::R11G11B10Float), Some(PixelType::Float));
        assert_eq!(format_datatype(HardwareFormat::X8Z24Unorm), Some(PixelType::UnsignedInt24_8));
        assert_eq!(
            format_datatype(HardwareFormat::Z32FloatS8X24Uint),
            Some(PixelType::Float32UnsignedInt24_8Rev)
        );
    }

    #[test]
    fn srgb_channels_are_not_measured() {
        // The sRGB twins have no RGB or ZS components, so their width is 0.
        for hw in [
            HardwareFormat::L8Srgb,
            HardwareFormat::L8A8Srgb,
            HardwareFormat::B8G8R8A8Srgb,
            HardwareFormat::A8R8G8B8Srgb,
            HardwareFormat::A8B8G8R8Srgb,
        ] {
            assert_eq!(max_component_bits(hw.description()), 0, "{hw:?}");
            assert_eq!(format_datatype(hw), Some(PixelType::UnsignedInt), "{hw:?}");
        }
        assert_eq!(
            format_datatype(HardwareFormat::B8G8R8A8Unorm),
            Some(PixelType::UnsignedByte)
        );
    }

    #[test]
    fn datatype_from_widest_component() {
        let cases = [
            (HardwareFormat::R8G8B8A8Unorm, Some(PixelType::UnsignedByte)),
            (HardwareFormat::R8G8B8A8Snorm, Some(PixelType::Byte)),
            (HardwareFormat::B8G8R8A8Srgb, Some(PixelType::UnsignedInt)),
            (HardwareFormat::R16G16B16A16Float, Some(PixelType::HalfFloat)),
            (HardwareFormat::L16Unorm, Some(PixelType::UnsignedShort)),
            (HardwareFormat::R16Sint, Some(PixelType::Short)),
            (HardwareFormat::Z16Unorm, Some(PixelType::UnsignedShort)),
            (HardwareFormat::S8Uint, Some(PixelType::UnsignedByte)),
            (HardwareFormat::Z32Float, Some(PixelType::Float)),
            (HardwareFormat::R32G32B32A32Uint, Some(PixelType::UnsignedInt)),
            (HardwareFormat::I32Sint, Some(PixelType::Int)),
            (HardwareFormat::B4G4R4A4Unorm, Some(PixelType::UnsignedInt)),
            (HardwareFormat::R64G64Float, Some(PixelType::Double)),
            (HardwareFormat::Uyvy, Some(PixelType::UnsignedShort)),
            (HardwareFormat::Nv12, Some(PixelType::UnsignedShort)),
            (HardwareFormat::Dxt5Rgba, None),
            (HardwareFormat::Etc1Rgb8, None),
        ];
        for (hw, expected) in cases {
            assert_eq!(format_datatype(hw), expected, "{hw:?}");
        }
    }
}
