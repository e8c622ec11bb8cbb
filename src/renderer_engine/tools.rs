use gl::types::*;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static::lazy_static! {
    /// Nombre d'occurrences de chaque message de debug OpenGL, par id
    static ref MESSAGE_COUNT: Mutex<HashMap<u32, u32>> = Mutex::new(HashMap::new());
}

/// Un message est logué à sa première occurrence puis toutes les 60 (~1 s).
const REPEAT_LOG_EVERY: u32 = 60;

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".to_string();
    }
    CStr::from_ptr(ptr as *const i8).to_string_lossy().into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));

    let mut num_ext = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_ext);
    info!("  Extensions: {} extensions detected", num_ext);

    let extensions: Vec<String> = (0..num_ext.max(0) as u32)
        .filter_map(|i| {
            let ptr = gl::GetStringi(gl::EXTENSIONS, i);
            (!ptr.is_null()).then(|| CStr::from_ptr(ptr as *const i8).to_string_lossy().into_owned())
        })
        .collect();
    debug!("GL_EXTENSIONS = {}", extensions.join(" "));

    // Consommer le glerror si nécessaire
    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Retourne `true` si ce message doit être logué (1re occurrence puis 1 sur 60).
fn should_log(id: GLuint) -> bool {
    let Ok(mut counts) = MESSAGE_COUNT.lock() else {
        return true;
    };
    let count = counts.entry(id).or_insert(0);
    *count += 1;
    *count == 1 || (*count).is_multiple_of(REPEAT_LOG_EVERY)
}

/// Callback OpenGL debug, safe pour Rust
extern "system" fn gl_debug_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const i8,
    _user_param: *mut c_void,
) {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION || message.is_null() {
        return;
    }
    if !should_log(id) {
        return;
    }

    // Unsafe uniquement pour lire le C string
    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };

    let src_str = match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        gl::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    };
    let type_str = match type_ {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "Other",
    };
    let sev_str = match severity {
        gl::DEBUG_SEVERITY_HIGH => "High",
        gl::DEBUG_SEVERITY_MEDIUM => "Medium",
        gl::DEBUG_SEVERITY_LOW => "Low",
        _ => "Unknown",
    };

    warn!(
        "[OpenGL Debug] id: {:X}, source: {}, type: {}, severity: {}, message: {}",
        id, src_str, type_str, sev_str, msg
    );
}

/// Configure le debug OpenGL via `glDebugMessageCallback`.
///
/// # Safety
///
/// Le contexte OpenGL doit être actif. Sans `GL_KHR_debug` (contextes 3.3
/// sans extension) l'appel est ignoré.
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback unavailable, GL debug output disabled");
        return;
    }
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_gl_debug_messages_are_throttled() {
        let id = 0x0BAD_F00D;
        let msg = CString::new("Test debug message").unwrap();

        for _ in 0..REPEAT_LOG_EVERY {
            gl_debug_callback(
                gl::DEBUG_SOURCE_APPLICATION,
                gl::DEBUG_TYPE_ERROR,
                id,
                gl::DEBUG_SEVERITY_HIGH,
                0,
                msg.as_ptr(),
                std::ptr::null_mut(),
            );
        }

        let counts = MESSAGE_COUNT.lock().unwrap();
        assert_eq!(counts.get(&id), Some(&REPEAT_LOG_EVERY));
    }

    #[test]
    fn test_notifications_are_ignored() {
        let id = 0x0000_CAFE;
        let msg = CString::new("notification").unwrap();
        gl_debug_callback(
            gl::DEBUG_SOURCE_API,
            gl::DEBUG_TYPE_OTHER,
            id,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            0,
            msg.as_ptr(),
            std::ptr::null_mut(),
        );
        assert!(MESSAGE_COUNT.lock().unwrap().get(&id).is_none());
    }
}
