pub mod validate;


pub mod dna {

    const fn comp_base_impl(base: u8) -> u8 {
        match base {
            b'A' => b'T',
            b'G' => b'C',
            b'C' => b'G',
            b'T' => b'A',
            _ => b'N',
        }
    }

    const fn base_index_impl(base: u8) -> u8 {
        match base {
            b'A' => 0,
            b'C' => 1,
            b'G' => 2,
            b'T' => 3,
            _ => 4,
        }
    }

    // loops can be used in const fns since Rust 1.46, meaning we can
    // build the lookup tables at compile time
    const fn comp_base_table() -> [u8; 256] {
        let mut i = 0;
        let mut table: [u8; 256] = [0; 256];
        while i <= 255 {
            table[i] = comp_base_impl(i as u8);
            i += 1;
        }
        table
    }

    const fn base_index_table() -> [u8; 256] {
        let mut i = 0;
        let mut table: [u8; 256] = [0; 256];
        while i <= 255 {
            table[i] = base_index_impl(i as u8);
            i += 1;
        }
        table
    }

    const DNA_COMP_TABLE: [u8; 256] = comp_base_table();

    const DNA_INDEX_TABLE: [u8; 256] = base_index_table();

    /// Retrieves the DNA complement for the provided base using a
    /// lookup-table built at compile time. Anything outside `ACGT`
    /// maps to `N`.
    #[inline]
    pub const fn comp_base(base: u8) -> u8 {
        DNA_COMP_TABLE[base as usize]
    }

    /// The slot index of a base, `A`, `C`, `G`, `T` map to `0..4`,
    /// everything else maps to 4.
    #[inline]
    pub const fn base_index(base: u8) -> u8 {
        DNA_INDEX_TABLE[base as usize]
    }

    #[inline]
    pub const fn is_base(base: u8) -> bool {
        base_index(base) < 4
    }

    /// Calculates the reverse complement for a sequence provided as a
    /// double-ended iterator. Collects into a `Vec<u8>` for
    /// convenience.
    #[inline]
    pub fn rev_comp<I, B>(seq: I) -> Vec<u8>
    where
        B: std::borrow::Borrow<u8>,
        I: IntoIterator<Item = B>,
        I::IntoIter: DoubleEndedIterator,
    {
        rev_comp_iter(seq).collect()
    }

    /// Given a sequence provided as a double-ended iterator over
    /// nucleotides, returns an iterator over the reverse complement
    /// of the sequence.
    #[inline]
    pub fn rev_comp_iter<I, B>(seq: I) -> impl Iterator<Item = u8>
    where
        B: std::borrow::Borrow<u8>,
        I: IntoIterator<Item = B>,
        I::IntoIter: DoubleEndedIterator,
    {
        seq.into_iter().rev().map(|b| comp_base(*b.borrow()))
    }

}
