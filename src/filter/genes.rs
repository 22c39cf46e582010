use crate::core::gene::Gene;
use crate::core::query::GeneQuery;

/// Select genes on the query chromosome whose span overlaps `[start, end]`.
///
/// Overlap rather than containment: a gene that starts before `start` but
/// ends inside the window is returned. Input order is preserved.
pub fn filter_genes<'a>(genes: &'a [Gene], query: &GeneQuery) -> Vec<&'a Gene> {
    let chrom = query.chrom();
    genes
        .iter()
        .filter(|gene| chrom.map_or(true, |chrom| gene.chrom == chrom))
        .filter(|gene| gene.overlaps(query.start, query.end))
        .collect()
}
