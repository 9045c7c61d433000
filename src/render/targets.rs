use super::helpers;
use wgpu;

/// Depth attachment sized to the surface; recreated on resize.
pub(crate) struct DepthTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, width, height);
        Self { tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.tex, self.view) = helpers::create_depth_texture(device, width, height);
    }
}

/// Equirectangular environment texture; a 1x1 placeholder until the image arrives.
pub(crate) struct EnvironmentTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) loaded: bool,
}

impl EnvironmentTarget {
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    pub(crate) fn placeholder(device: &wgpu::Device) -> Self {
        let (tex, view) = helpers::create_texture(
            device,
            "env_placeholder",
            1,
            1,
            Self::FORMAT,
            wgpu::TextureUsages::TEXTURE_BINDING,
        );
        Self {
            tex,
            view,
            loaded: false,
        }
    }

    /// Upload a decoded image; the browser copies straight into the texture.
    pub(crate) fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bitmap: &web_sys::ImageBitmap,
    ) -> Self {
        let (width, height) = (bitmap.width(), bitmap.height());
        let (tex, view) = helpers::create_texture(
            device,
            "env_tex",
            width,
            height,
            Self::FORMAT,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
        );
        Self {
            tex,
            view,
            loaded: true,
        }
    }
}
