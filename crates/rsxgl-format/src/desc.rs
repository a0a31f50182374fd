//! Per-format channel geometry.
//!
//! A [`FormatDescription`] says how a [`HardwareFormat`] is laid out in memory: the layout class,
//! up to four physical channels (in memory order, least significant first) and a swizzle that
//! maps logical components (R, G, B, A or Depth, Stencil) onto those physical channels.
//!
//! Descriptions are compiled in next to the format list in [`crate::pipe`].

use crate::pipe::HardwareFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatLayout {
    /// Every pixel is a sequence of whole channels.
    Plain,
    /// Packed 4:2:2 YUV.
    Subsampled,
    /// S3TC/DXTn block compression.
    S3tc,
    /// RGTC/LATC block compression.
    Rgtc,
    /// ETC1 block compression.
    Etc,
    /// Planar YUV and packed shared-exponent/small-float formats.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colorspace {
    Rgb,
    Srgb,
    Yuv,
    /// Depth/stencil.
    Zs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    Void,
    Unsigned,
    Signed,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    pub ty: ChannelType,
    pub normalized: bool,
    /// Width in bits.
    pub size: u32,
}

impl Channel {
    pub const NONE: Channel = Channel::void(0);

    pub const fn void(size: u32) -> Self {
        Self {
            ty: ChannelType::Void,
            normalized: false,
            size,
        }
    }

    pub const fn unorm(size: u32) -> Self {
        Self {
            ty: ChannelType::Unsigned,
            normalized: true,
            size,
        }
    }

    pub const fn snorm(size: u32) -> Self {
        Self {
            ty: ChannelType::Signed,
            normalized: true,
            size,
        }
    }

    pub const fn uint(size: u32) -> Self {
        Self {
            ty: ChannelType::Unsigned,
            normalized: false,
            size,
        }
    }

    pub const fn sint(size: u32) -> Self {
        Self {
            ty: ChannelType::Signed,
            normalized: false,
            size,
        }
    }

    pub const fn float(size: u32) -> Self {
        Self {
            ty: ChannelType::Float,
            normalized: false,
            size,
        }
    }
}

/// Source of a logical component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    X,
    Y,
    Z,
    W,
    /// Constant zero.
    Zero,
    /// Constant one.
    One,
    /// Component does not exist in this format.
    None,
}

impl Swizzle {
    /// Physical channel index selected by this swizzle, if it selects one.
    pub const fn channel_index(self) -> Option<usize> {
        match self {
            Swizzle::X => Some(0),
            Swizzle::Y => Some(1),
            Swizzle::Z => Some(2),
            Swizzle::W => Some(3),
            Swizzle::Zero | Swizzle::One | Swizzle::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescription {
    pub format: HardwareFormat,
    pub name: &'static str,
    pub layout: FormatLayout,
    /// Number of physical channels, void channels included.
    pub nr_channels: usize,
    pub channels: [Channel; 4],
    pub swizzle: [Swizzle; 4],
    pub colorspace: Colorspace,
}

impl FormatDescription {
    pub(crate) const fn new(
        format: HardwareFormat,
        name: &'static str,
        layout: FormatLayout,
        channels: &[Channel],
        swizzle: [Swizzle; 4],
        colorspace: Colorspace,
    ) -> Self {
        let mut out = [Channel::NONE; 4];
        let mut i = 0;
        while i < channels.len() && i < 4 {
            out[i] = channels[i];
            i += 1;
        }
        Self {
            format,
            name,
            layout,
            nr_channels: i,
            channels: out,
            swizzle,
            colorspace,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.layout == FormatLayout::Plain
    }

    pub fn is_depth_or_stencil(&self) -> bool {
        self.colorspace == Colorspace::Zs
    }

    pub fn is_compressed(&self) -> bool {
        matches!(
            self.layout,
            FormatLayout::S3tc | FormatLayout::Rgtc | FormatLayout::Etc
        )
    }

    pub fn is_yuv(&self) -> bool {
        self.colorspace == Colorspace::Yuv
    }

    /// Physical channel backing logical component `component`, if any.
    ///
    /// Only channels below `nr_channels` count; constants and missing components yield `None`.
    pub fn component_channel(&self, component: usize) -> Option<&Channel> {
        let swizzle = self.swizzle.get(component)?;
        let index = swizzle.channel_index()?;
        if index < self.nr_channels {
            self.channels.get(index)
        } else {
            None
        }
    }

    /// Bit width of logical component `component` when read in `colorspace`.
    ///
    /// Returns 0 when the format is in a different colorspace or the component is not backed by
    /// a channel.
    pub fn component_bits(&self, colorspace: Colorspace, component: usize) -> u32 {
        if self.colorspace != colorspace {
            return 0;
        }
        self.component_channel(component).map_or(0, |c| c.size)
    }

    /// First channel whose type is not [`ChannelType::Void`].
    pub fn first_non_void_channel(&self) -> Option<&Channel> {
        self.channels[..self.nr_channels]
            .iter()
            .find(|c| c.ty != ChannelType::Void)
    }
}
