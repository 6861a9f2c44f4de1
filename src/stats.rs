//! `ExtractStats` tracks how many entries each stage of the pipeline kept
//! or dropped. It carries no logging or persistence of its own.

pub struct ExtractStats {
    pub entries: u64,
    pub dropped_selection: u64,
    pub no_gloss: u64,
    pub gloss_out_of_bounds: u64,
    pub head_too_long: u64,
    pub emitted: u64,
}

impl ExtractStats {
    pub fn new() -> Self {
        Self {
            entries: 0,
            dropped_selection: 0,
            no_gloss: 0,
            gloss_out_of_bounds: 0,
            head_too_long: 0,
            emitted: 0,
        }
    }

    pub fn tick_entry(&mut self) {
        self.entries += 1;
    }

    pub fn tick_dropped_selection(&mut self) {
        self.dropped_selection += 1;
    }

    pub fn tick_no_gloss(&mut self) {
        self.no_gloss += 1;
    }

    pub fn tick_gloss_out_of_bounds(&mut self) {
        self.gloss_out_of_bounds += 1;
    }

    pub fn tick_head_too_long(&mut self) {
        self.head_too_long += 1;
    }

    pub fn tick_emitted(&mut self) {
        self.emitted += 1;
    }

    pub fn report(&self) {
        eprintln!(
            "Processed {} entries, emitted {}: {} filtered out, {} without a gloss, \
             {} gloss out of bounds, {} head too long",
            self.entries,
            self.emitted,
            self.dropped_selection,
            self.no_gloss,
            self.gloss_out_of_bounds,
            self.head_too_long
        );
    }
}

impl Default for ExtractStats {
    fn default() -> Self {
        Self::new()
    }
}
