use gl::types::GLuint;
use image::RgbaImage;

/// Alloue une texture RGBA8 vide de `width x height`.
///
/// # Safety
/// Le contexte OpenGL doit être actif sur le thread courant.
pub unsafe fn create_frame_texture(width: u32, height: u32) -> GLuint {
    let mut tex_id = 0;
    gl::GenTextures(1, &mut tex_id);
    gl::BindTexture(gl::TEXTURE_2D, tex_id);

    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as i32);

    gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::RGBA8 as i32,
        width as i32,
        height as i32,
        0,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        std::ptr::null(),
    );

    gl::BindTexture(gl::TEXTURE_2D, 0);
    tex_id
}

/// Copie une image complète dans une texture de même taille.
///
/// # Safety
/// Le contexte OpenGL doit être actif et `tex_id` doit avoir les dimensions de `frame`.
pub unsafe fn upload_frame(tex_id: GLuint, frame: &RgbaImage) {
    gl::BindTexture(gl::TEXTURE_2D, tex_id);
    gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
    gl::TexSubImage2D(
        gl::TEXTURE_2D,
        0,
        0,
        0,
        frame.width() as i32,
        frame.height() as i32,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        frame.as_raw().as_ptr() as *const _,
    );
    gl::BindTexture(gl::TEXTURE_2D, 0);
}
