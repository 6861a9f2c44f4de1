use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(body) = std::str::from_utf8(data) {
                let frame = toagloss::guess_frame(body);
                assert!(
                    frame == "?"
                        || frame
                            .chars()
                            .all(|c| matches!(c, '0' | '1' | '2' | 'c' | ' '))
                );
            }
        });
    }
}
