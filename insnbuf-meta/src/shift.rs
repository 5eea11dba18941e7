named_tag! {
    /// Scale operation applied to the index of an address expression. Only
    /// ARM encodes anything other than a left shift.
    #[derive(Default)]
    pub enum ShiftKind {
        #[default]
        Lsl => "lsl",
        Lsr => "lsr",
        Asl => "asl",
        Ror => "ror",
        Rrx => "rrx",
    }
}
