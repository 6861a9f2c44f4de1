use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(body) = std::str::from_utf8(data) {
                if let Some(gloss) = toagloss::extract_gloss(body, "head") {
                    assert!(!gloss.contains(toagloss::PLACEHOLDER));
                }
            }
        });
    }
}
