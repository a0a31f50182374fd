use std::cell::RefCell;

use proptest::prelude::*;
use rsxgl_format::{
    choose_format, choose_format_raw, find_exact_format, internal_format_of, BindFlags,
    FormatCapabilities, FormatRequest, HardwareFormat, InternalFormat, PixelFormat, PixelType,
    SupportedFormats, TextureTarget, FORMAT_MAP, GL_NONE,
};

fn internal_format_strategy() -> impl Strategy<Value = InternalFormat> {
    prop::sample::select(InternalFormat::ALL)
}

fn hardware_format_strategy() -> impl Strategy<Value = HardwareFormat> {
    prop::sample::select(HardwareFormat::ALL)
}

fn external_strategy() -> impl Strategy<Value = (Option<PixelFormat>, Option<PixelType>)> {
    (
        prop::option::of(prop::sample::select(PixelFormat::ALL)),
        prop::option::of(prop::sample::select(PixelType::ALL)),
    )
}

fn target_strategy() -> impl Strategy<Value = TextureTarget> {
    prop_oneof![
        Just(TextureTarget::Texture2D),
        Just(TextureTarget::TextureCube),
        Just(TextureTarget::Texture3D),
        Just(TextureTarget::TextureRect),
    ]
}

fn request_strategy() -> impl Strategy<Value = FormatRequest> {
    (internal_format_strategy(), external_strategy(), target_strategy()).prop_map(
        |(internal, (format, ty), target)| {
            FormatRequest::new(internal)
                .with_format(format)
                .with_type(ty)
                .with_target(target)
        },
    )
}

fn caps_strategy() -> impl Strategy<Value = SupportedFormats> {
    prop::collection::hash_set(hardware_format_strategy(), 0..48)
        .prop_map(|formats| formats.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolution_is_deterministic(req in request_strategy(), caps in caps_strategy()) {
        prop_assert_eq!(choose_format(&caps, &req), choose_format(&caps, &req));
    }

    #[test]
    fn result_is_always_accepted_by_the_oracle(req in request_strategy(), caps in caps_strategy()) {
        if let Some(hw) = choose_format(&caps, &req) {
            prop_assert!(caps.contains(hw));
        }
    }

    #[test]
    fn preference_walk_returns_the_only_accepted_candidate(
        entry_index in 0..FORMAT_MAP.len(),
        alias_seed in any::<prop::sample::Index>(),
        candidate_seed in any::<prop::sample::Index>(),
    ) {
        let entry = &FORMAT_MAP[entry_index];
        let internal = *alias_seed.get(entry.internal_formats);
        // Later entries never shadow earlier ones: resolve through the entry that owns the alias.
        let owner = FORMAT_MAP.iter().find(|e| e.contains(internal)).unwrap();
        let candidate = *candidate_seed.get(owner.candidates);
        let first_position = owner.candidates.iter().position(|&c| c == candidate).unwrap();

        let asked = RefCell::new(Vec::new());
        let oracle = |f: HardwareFormat, _: TextureTarget, _: u32, _: BindFlags| {
            asked.borrow_mut().push(f);
            f == candidate
        };

        prop_assert_eq!(choose_format(&oracle, &FormatRequest::new(internal)), Some(candidate));
        let asked = asked.into_inner();
        prop_assert_eq!(asked.as_slice(), &owner.candidates[..=first_position]);
    }

    #[test]
    fn oracle_is_asked_once_per_candidate_in_order(req in request_strategy(), caps in caps_strategy()) {
        let asked = RefCell::new(Vec::new());
        let oracle = |f: HardwareFormat, t: TextureTarget, s: u32, b: BindFlags| {
            asked.borrow_mut().push(f);
            caps.is_format_supported(f, t, s, b)
        };
        let chosen = choose_format(&oracle, &req);

        // One question for the exact candidate, then one per preference slot up to the first hit.
        let mut expected = Vec::new();
        let exact = req
            .format
            .zip(req.ty)
            .and_then(|(format, ty)| find_exact_format(req.internal_format, format, ty));
        let mut done = false;
        if let Some(exact) = exact {
            expected.push(exact);
            done = caps.contains(exact);
        }
        if !done {
            if let Some(owner) = FORMAT_MAP.iter().find(|e| e.contains(req.internal_format)) {
                for &candidate in owner.candidates {
                    expected.push(candidate);
                    if caps.contains(candidate) {
                        break;
                    }
                }
            }
        }

        prop_assert_eq!(asked.into_inner(), expected.clone());
        prop_assert_eq!(chosen, expected.last().copied().filter(|&hw| caps.contains(hw)));
    }

    #[test]
    fn inverse_lookup_is_lossy_but_consistent(hw in hardware_format_strategy()) {
        let expected = FORMAT_MAP
            .iter()
            .find(|e| e.candidates.first() == Some(&hw))
            .map(|e| e.internal_formats[0]);
        prop_assert_eq!(internal_format_of(hw), expected);
    }

    #[test]
    fn raw_entry_point_matches_typed_one(req in request_strategy(), caps in caps_strategy()) {
        let raw = choose_format_raw(
            &caps,
            req.internal_format.as_raw(),
            req.format.map_or(GL_NONE, PixelFormat::as_raw),
            req.ty.map_or(GL_NONE, PixelType::as_raw),
            req.target.as_raw(),
            req.sample_count,
            req.bindings.bits(),
        );
        prop_assert_eq!(raw, choose_format(&caps, &req));
    }

    #[test]
    fn raw_entry_point_never_panics(
        internal in any::<u32>(),
        format in any::<u32>(),
        ty in any::<u32>(),
        target in 0u32..16,
        samples in 0u32..8,
        bindings in any::<u32>(),
    ) {
        let _ = choose_format_raw(&SupportedFormats::all(), internal, format, ty, target, samples, bindings);
    }
}
