use pretty_assertions::assert_eq;
use rsxgl::fifo::{CommandContext, FifoWindow};
use rsxgl::format::{
    choose_format, choose_source_format, color_channel_bit_depth, depth_channel_bit_depth,
    format_datatype, BindFlags, FormatRequest, HardwareFormat, InternalFormat, PixelFormat,
    PixelType, SupportedFormats,
};

/// Formats a typical RSX-class device exposes for sampling and rendering.
fn device_caps() -> SupportedFormats {
    [
        HardwareFormat::A8R8G8B8Unorm,
        HardwareFormat::B8G8R8A8Unorm,
        HardwareFormat::X8R8G8B8Unorm,
        HardwareFormat::B5G6R5Unorm,
        HardwareFormat::L8Unorm,
        HardwareFormat::Z16Unorm,
        HardwareFormat::Z24UnormS8Uint,
        HardwareFormat::Dxt1Rgba,
        HardwareFormat::R16G16B16A16Float,
        HardwareFormat::R32G32B32A32Float,
    ]
    .into_iter()
    .collect()
}

fn bytes_per_texel(hw: HardwareFormat) -> u32 {
    let desc = hw.description();
    desc.channels[..desc.nr_channels].iter().map(|c| c.size).sum::<u32>() / 8
}

#[test]
fn color_attachment_setup() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let caps = device_caps();
    let req = FormatRequest::new(InternalFormat::Rgba8)
        .with_external(PixelFormat::Rgba, PixelType::UnsignedByte)
        .with_bindings(BindFlags::SAMPLER_VIEW | BindFlags::RENDER_TARGET);

    // RGBA byte order is not native, so the exact stage misses and the table picks BGRA.
    let hw = choose_format(&caps, &req).unwrap();
    assert_eq!(hw, HardwareFormat::B8G8R8A8Unorm);
    assert_eq!(
        (0..4).map(|c| color_channel_bit_depth(hw, c)).collect::<Vec<_>>(),
        vec![8, 8, 8, 8]
    );
    assert_eq!(format_datatype(hw), Some(PixelType::UnsignedByte));

    // Client bytes are described separately for the upload.
    assert_eq!(
        choose_source_format(PixelFormat::Rgba, PixelType::UnsignedByte),
        Some(HardwareFormat::R8G8B8A8Unorm)
    );
}

#[test]
fn depth_attachment_setup() {
    let caps = device_caps();
    let req = FormatRequest::new(InternalFormat::DepthComponent24).with_bindings(BindFlags::DEPTH_STENCIL);

    // Neither padded 24-bit layout is available; the depth chain reaches Z16 before Z24S8.
    let hw = choose_format(&caps, &req).unwrap();
    assert_eq!(hw, HardwareFormat::Z16Unorm);
    assert_eq!(depth_channel_bit_depth(hw, 0), 16);

    let hw = choose_format(&caps, &FormatRequest::new(InternalFormat::Depth24Stencil8)).unwrap();
    assert_eq!(hw, HardwareFormat::Z24UnormS8Uint);
    assert_eq!((depth_channel_bit_depth(hw, 0), depth_channel_bit_depth(hw, 1)), (24, 8));
    assert_eq!(color_channel_bit_depth(hw, 0), 0);
}

#[test]
fn upload_reserves_fifo_space_for_texels() {
    let caps = device_caps();
    let hw = choose_format(&caps, &FormatRequest::new(InternalFormat::Rgba16F)).unwrap();
    assert_eq!(hw, HardwareFormat::R16G16B16A16Float);

    let texels = 16;
    let words = texels * bytes_per_texel(hw) / 4;
    assert_eq!(words, 32);

    let mut flushes = 0;
    let mut ctx = CommandContext::new(
        FifoWindow::new(0, 48),
        Box::new(move |window: &mut FifoWindow, _count: u32| {
            flushes += 1;
            tracing::debug!(flushes, "flushing command buffer");
            window.current = window.begin;
            Ok(())
        }),
    );

    for _ in 0..3 {
        ctx.reserve(words).unwrap();
        ctx.advance(words).unwrap();
    }
    assert_eq!(ctx.window().used(), words);
}
