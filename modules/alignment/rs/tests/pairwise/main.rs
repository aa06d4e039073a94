mod edit;
mod properties;

pub fn rows(alignments: &[bioalgo_alignment_rs::pairwise::Alignment<u8>]) -> Vec<(String, String)> {
    alignments.iter().map(|x| x.rows()).collect()
}
