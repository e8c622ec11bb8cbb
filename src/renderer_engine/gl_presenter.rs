use gl::types::GLuint;
use image::RgbaImage;
use log::{debug, warn};

use crate::renderer_engine::utils::texture::{create_frame_texture, upload_frame};

/// Affiche la surface raster dans la fenêtre.
///
/// L'image est envoyée dans une texture attachée à un framebuffer de
/// lecture, puis copiée vers le framebuffer par défaut avec
/// `glBlitFramebuffer`. La surface a son origine en haut à gauche, OpenGL en
/// bas à gauche : la copie inverse l'axe y.
#[derive(Debug)]
pub struct GlPresenter {
    texture: GLuint,
    read_fbo: GLuint,
    size: (u32, u32),
}

impl GlPresenter {
    /// # Safety
    /// Le contexte OpenGL doit être actif et les pointeurs de fonctions chargés.
    pub unsafe fn new(width: u32, height: u32) -> Self {
        let mut read_fbo = 0;
        gl::GenFramebuffers(1, &mut read_fbo);
        let mut presenter = Self {
            texture: 0,
            read_fbo,
            size: (0, 0),
        };
        presenter.resize(width, height);
        presenter
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Réalloue la texture si la taille change.
    ///
    /// # Safety
    /// Le contexte OpenGL doit être actif.
    pub unsafe fn resize(&mut self, width: u32, height: u32) {
        if self.size == (width, height) && self.texture != 0 {
            return;
        }
        if self.texture != 0 {
            gl::DeleteTextures(1, &self.texture);
        }
        self.texture = create_frame_texture(width.max(1), height.max(1));
        self.size = (width, height);

        gl::BindFramebuffer(gl::READ_FRAMEBUFFER, self.read_fbo);
        gl::FramebufferTexture2D(
            gl::READ_FRAMEBUFFER,
            gl::COLOR_ATTACHMENT0,
            gl::TEXTURE_2D,
            self.texture,
            0,
        );
        let status = gl::CheckFramebufferStatus(gl::READ_FRAMEBUFFER);
        if status != gl::FRAMEBUFFER_COMPLETE {
            warn!("⚠️ Presenter framebuffer incomplete: 0x{:X}", status);
        }
        gl::BindFramebuffer(gl::READ_FRAMEBUFFER, 0);
        debug!("🖼️ Presenter texture resized to {} x {}", width, height);
    }

    /// Envoie `frame` et la copie dans la fenêtre (`window_size` en pixels).
    ///
    /// # Safety
    /// Le contexte OpenGL doit être actif.
    pub unsafe fn present(&mut self, frame: &RgbaImage, window_size: (i32, i32)) {
        if frame.dimensions() != self.size {
            self.resize(frame.width(), frame.height());
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return;
        }
        upload_frame(self.texture, frame);

        let (w, h) = (self.size.0 as i32, self.size.1 as i32);
        gl::BindFramebuffer(gl::READ_FRAMEBUFFER, self.read_fbo);
        gl::BindFramebuffer(gl::DRAW_FRAMEBUFFER, 0);
        gl::BlitFramebuffer(
            0,
            0,
            w,
            h,
            // destination inversée verticalement
            0,
            window_size.1,
            window_size.0,
            0,
            gl::COLOR_BUFFER_BIT,
            gl::NEAREST,
        );
        gl::BindFramebuffer(gl::READ_FRAMEBUFFER, 0);
    }

    /// # Safety
    /// Le contexte OpenGL doit être actif.
    pub unsafe fn close(&mut self) {
        if self.texture != 0 {
            gl::DeleteTextures(1, &self.texture);
            self.texture = 0;
        }
        if self.read_fbo != 0 {
            gl::DeleteFramebuffers(1, &self.read_fbo);
            self.read_fbo = 0;
        }
    }
}
