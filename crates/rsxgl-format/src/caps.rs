use std::collections::HashSet;

use crate::pipe::{BindFlags, HardwareFormat, TextureTarget};

/// Answers whether the device can use a hardware format for a given target, sample count and
/// set of usages.
///
/// Implementations are expected to be deterministic for the duration of a resolution. They may
/// be expensive; the resolver asks at most once per candidate.
pub trait FormatCapabilities {
    fn is_format_supported(
        &self,
        format: HardwareFormat,
        target: TextureTarget,
        sample_count: u32,
        bindings: BindFlags,
    ) -> bool;
}

impl<F> FormatCapabilities for F
where
    F: Fn(HardwareFormat, TextureTarget, u32, BindFlags) -> bool,
{
    fn is_format_supported(
        &self,
        format: HardwareFormat,
        target: TextureTarget,
        sample_count: u32,
        bindings: BindFlags,
    ) -> bool {
        self(format, target, sample_count, bindings)
    }
}

/// A snapshot of device capabilities as an explicit set of formats.
///
/// A format is supported when it is in the set, the sample count does not exceed
/// `max_samples`, and every requested binding is in `bindings`. Targets are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedFormats {
    formats: HashSet<HardwareFormat>,
    bindings: BindFlags,
    max_samples: u32,
}

impl Default for SupportedFormats {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportedFormats {
    /// Empty set; accepts every binding and a single sample.
    pub fn new() -> Self {
        Self {
            formats: HashSet::new(),
            bindings: BindFlags::all(),
            max_samples: 1,
        }
    }

    /// Every known hardware format.
    pub fn all() -> Self {
        HardwareFormat::ALL.iter().copied().collect()
    }

    pub fn with_format(mut self, format: HardwareFormat) -> Self {
        self.formats.insert(format);
        self
    }

    pub fn without_format(mut self, format: HardwareFormat) -> Self {
        self.formats.remove(&format);
        self
    }

    /// Restricts the usages this snapshot can satisfy.
    pub fn with_bindings(mut self, bindings: BindFlags) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_max_samples(mut self, max_samples: u32) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn contains(&self, format: HardwareFormat) -> bool {
        self.formats.contains(&format)
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl FromIterator<HardwareFormat> for SupportedFormats {
    fn from_iter<I: IntoIterator<Item = HardwareFormat>>(iter: I) -> Self {
        Self {
            formats: iter.into_iter().collect(),
            ..Self::new()
        }
    }
}

impl FormatCapabilities for SupportedFormats {
    fn is_format_supported(
        &self,
        format: HardwareFormat,
        _target: TextureTarget,
        sample_count: u32,
        bindings: BindFlags,
    ) -> bool {
        self.formats.contains(&format)
            && sample_count <= self.max_samples.max(1)
            && self.bindings.contains(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_oracles() {
        let only_z16 = |f: HardwareFormat, _: TextureTarget, _: u32, _: BindFlags| {
            f == HardwareFormat::Z16Unorm
        };
        assert!(only_z16.is_format_supported(
            HardwareFormat::Z16Unorm,
            TextureTarget::Texture2D,
            1,
            BindFlags::DEPTH_STENCIL
        ));
        assert!(!(&only_z16).is_format_supported(
            HardwareFormat::Z32Unorm,
            TextureTarget::Texture2D,
            1,
            BindFlags::DEPTH_STENCIL
        ));
    }

    #[test]
    fn supported_formats_checks_membership_bindings_and_samples() {
        let caps = SupportedFormats::new()
            .with_format(HardwareFormat::B8G8R8A8Unorm)
            .with_bindings(BindFlags::SAMPLER_VIEW | BindFlags::RENDER_TARGET)
            .with_max_samples(4);

        let t = TextureTarget::Texture2D;
        assert!(caps.is_format_supported(HardwareFormat::B8G8R8A8Unorm, t, 4, BindFlags::SAMPLER_VIEW));
        assert!(!caps.is_format_supported(HardwareFormat::B8G8R8A8Unorm, t, 8, BindFlags::SAMPLER_VIEW));
        assert!(!caps.is_format_supported(HardwareFormat::B8G8R8A8Unorm, t, 1, BindFlags::DEPTH_STENCIL));
        assert!(!caps.is_format_supported(HardwareFormat::R8G8B8A8Unorm, t, 1, BindFlags::SAMPLER_VIEW));
    }

    #[test]
    fn all_and_without() {
        let caps = SupportedFormats::all().without_format(HardwareFormat::Uyvy);
        assert_eq!(caps.len(), HardwareFormat::ALL.len() - 1);
        assert!(!caps.contains(HardwareFormat::Uyvy));
        assert!(SupportedFormats::default().is_empty());
    }
}
