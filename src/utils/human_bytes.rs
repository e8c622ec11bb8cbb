/// Formatage lisible d'une taille en octets (B, KB, MB, GB, base 1024).
pub trait HumanBytes {
    fn human_bytes(&self) -> String;
}

fn format_bytes(size: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    match size.abs() {
        s if s >= GB => format!("{:.2} GB", size / GB),
        s if s >= MB => format!("{:.2} MB", size / MB),
        s if s >= KB => format!("{:.2} KB", size / KB),
        _ => format!("{} B", size),
    }
}

macro_rules! impl_human_bytes {
    ($($t:ty),*) => {
        $(
            impl HumanBytes for $t {
                fn human_bytes(&self) -> String {
                    format_bytes(*self as f64)
                }
            }
        )*
    };
}

impl_human_bytes!(usize, u64, u32, isize);
