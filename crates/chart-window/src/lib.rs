// File: crates/chart-window/src/lib.rs
// Summary: Show a chart in a native window (CPU render -> softbuffer blit) and block until it is closed.

use anyhow::{anyhow, Result};
use chart_core::{Chart, RenderOptions};
use std::num::NonZeroU32;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

pub struct WindowOptions {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Template for each frame; width, height and scale are overwritten per frame.
    pub render: RenderOptions,
}

impl Default for WindowOptions {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            title: "Chart".to_string(),
            width: render.width as f64,
            height: render.height as f64,
            render,
        }
    }
}

/// Open a window showing `chart` and run its event loop on the calling thread.
/// Returns once the user closes the window. The chart is re-rendered on every resize.
pub fn show(chart: &Chart, opts: &WindowOptions) -> Result<()> {
    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&opts.title)
        .with_inner_size(LogicalSize::new(opts.width, opts.height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let mut size = window.inner_size();
    let mut failure: Option<anyhow::Error> = None;

    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    size = *new_inner_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let frame_opts = frame_options(&opts.render, size, window.scale_factor());
                if let Err(e) = present(&mut surface, chart, &frame_opts, size) {
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Per-frame render options: physical window size, strokes/fonts scaled by the HiDPI factor.
pub fn frame_options(template: &RenderOptions, size: PhysicalSize<u32>, scale_factor: f64) -> RenderOptions {
    let mut opts = template.clone();
    opts.width = size.width.max(1) as i32;
    opts.height = size.height.max(1) as i32;
    opts.scale = template.scale * scale_factor as f32;
    opts
}

/// Convert straight RGBA8 pixels into softbuffer's 0RGB u32 layout.
pub fn rgba_to_0rgb(rgba: &[u8], out: &mut [u32]) {
    for (dst, px) in out.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
}

fn present(
    surface: &mut softbuffer::Surface,
    chart: &Chart,
    opts: &RenderOptions,
    size: PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimised
        return Ok(());
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow!("resize surface: {e:?}"))?;

    let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;
    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow!("frame buffer: {e:?}"))?;
    rgba_to_0rgb(&rgba, &mut frame);
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}
