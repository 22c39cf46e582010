use crate::core::ld::{LdEntry, LdPair};
use crate::core::query::LdQuery;

/// Select the LD partners of `query.variant`, optionally narrowed by
/// chromosome and `[start, stop]` on the partner position.
///
/// Each match is exposed with the single correlation kind the query asks for.
pub fn filter_ld<'a>(pairs: &'a [LdPair], query: &'a LdQuery) -> Vec<LdEntry<'a>> {
    let chrom = query.chrom();
    pairs
        .iter()
        .filter(|pair| pair.variant1 == query.variant)
        .filter(|pair| chrom.map_or(true, |chrom| pair.chrom == chrom))
        .filter(|pair| query.start.map_or(true, |start| pair.pos >= start))
        .filter(|pair| query.stop.map_or(true, |stop| pair.pos <= stop))
        .map(|pair| LdEntry::new(pair, &query.correlation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "16:53800954_C/T";

    fn pairs() -> Vec<LdPair> {
        vec![
            LdPair::new(INDEX, "16:53801000_A/G", "16", 53_801_000)
                .with_correlation("rsquare", 0.9)
                .with_correlation("dprime", 1.0),
            LdPair::new("16:1_A/G", "16:53801500_A/G", "16", 53_801_500)
                .with_correlation("rsquare", 0.3),
            LdPair::new(INDEX, "16:53900000_G/T", "16", 53_900_000).with_correlation("rsquare", 0.2),
            LdPair::new(INDEX, "17:100_G/T", "17", 100),
        ]
    }

    #[test]
    fn test_variant_is_mandatory_exact_match() {
        let pairs = pairs();
        let query = LdQuery::new(INDEX);
        let result = filter_ld(&pairs, &query);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|e| e.pair.variant1 == INDEX));

        let prefix = LdQuery::new("16:53800954");
        assert!(filter_ld(&pairs, &prefix).is_empty());
    }

    #[test]
    fn test_position_window_and_chrom() {
        let pairs = pairs();
        let query = LdQuery {
            chrom: Some("16".into()),
            start: Some(53_801_000),
            stop: Some(53_850_000),
            ..LdQuery::new(INDEX)
        };
        let result = filter_ld(&pairs, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].pair.variant2, "16:53801000_A/G");
    }

    #[test]
    fn test_correlation_kind_selection() {
        let pairs = pairs();
        let query = LdQuery {
            correlation: "dprime".into(),
            ..LdQuery::new(INDEX)
        };
        let result = filter_ld(&pairs, &query);
        let values: Vec<f64> = result.iter().map(LdEntry::value).collect();
        assert_eq!(values, vec![1.0, 0.0, 0.0]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json[0]["dprime"], 1.0);
        assert!(json[0].get("rsquare").is_none());
    }
}
