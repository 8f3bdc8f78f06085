use std::collections::HashMap;

use rfid_model::{Company, CompanyBucket, ResolvedRow};

/// Group valid rows by company.
///
/// Buckets come out in order of each company's first valid row; rows keep
/// their source order within a bucket. Duplicates are left in place.
pub fn partition_by_company<'a, I>(rows: I) -> Vec<CompanyBucket>
where
    I: IntoIterator<Item = &'a ResolvedRow>,
{
    let mut buckets: Vec<CompanyBucket> = Vec::new();
    let mut positions: HashMap<Company, usize> = HashMap::new();

    for row in rows.into_iter().filter(|row| row.tag_valid) {
        let position = *positions.entry(row.company.clone()).or_insert_with(|| {
            buckets.push(CompanyBucket::new(row.company.clone()));
            buckets.len() - 1
        });
        buckets[position].rows.push(row.clone());
    }

    tracing::debug!(companies = buckets.len(), "rows partitioned by company");
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, tag: &str, valid: bool, company: Company) -> ResolvedRow {
        ResolvedRow {
            index,
            raw_tag: tag.to_string(),
            clean_tag: tag.to_string(),
            tag_valid: valid,
            business_id: format!("ID{index}"),
            company,
        }
    }

    #[test]
    fn buckets_follow_first_appearance() {
        let beta = Company::Named("Beta".to_string());
        let acme = Company::Named("Acme".to_string());
        let rows = vec![
            row(0, "AAAAAA", true, beta.clone()),
            row(1, "BBBBBB", true, acme.clone()),
            row(2, "CCCCCC", true, Company::Unspecified),
            row(3, "DDDDDD", true, beta.clone()),
        ];
        let buckets = partition_by_company(&rows);
        let companies: Vec<&Company> = buckets.iter().map(|bucket| &bucket.company).collect();
        assert_eq!(companies, vec![&beta, &acme, &Company::Unspecified]);
        let beta_rows: Vec<usize> = buckets[0].rows.iter().map(|row| row.index).collect();
        assert_eq!(beta_rows, vec![0, 3]);
    }

    #[test]
    fn invalid_rows_are_excluded() {
        let rows = vec![
            row(0, "ZZZ", false, Company::All),
            row(1, "", false, Company::All),
            row(2, "AABBCC", true, Company::All),
        ];
        let buckets = partition_by_company(&rows);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].len(), 1);
        assert!(buckets[0].company.is_all());
    }

    #[test]
    fn no_valid_rows_means_no_buckets() {
        let rows = vec![row(0, "ZZZ", false, Company::All)];
        assert!(partition_by_company(&rows).is_empty());
    }
}
