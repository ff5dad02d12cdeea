use super::*;
use crate::application::FrameRenderer;

impl FrameRenderer for CubeRenderer {
    fn render_frame(&mut self, delta_time: f64) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => {
                get_logger().error(
                    LogComponent::Infrastructure("CubeRenderer"),
                    &format!("Failed to get surface texture: {:?}", e),
                );
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        self.scene.encode(&self.queue, &mut encoder, &view, delta_time);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
