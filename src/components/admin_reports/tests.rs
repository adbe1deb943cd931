use super::*;
use chrono::NaiveDate;

fn row(id: i64, loan_date: &str, status: LoanStatus) -> AdminLoanRow {
    AdminLoanRow {
        id,
        borrower: "Budi".to_string(),
        item_summary: "Proyektor x1".to_string(),
        loan_date: NaiveDate::parse_from_str(loan_date, "%Y-%m-%d").unwrap(),
        return_due: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        returned_at: None,
        status,
        purpose: None,
    }
}

#[test]
fn summary_counts_by_status() {
    let rows = vec![
        row(1, "2026-08-01", LoanStatus::Menunggu),
        row(2, "2026-08-02", LoanStatus::Dipinjam),
        row(3, "2026-08-03", LoanStatus::Dipinjam),
        row(4, "2026-08-04", LoanStatus::Dikembalikan),
        row(5, "2026-08-05", LoanStatus::Ditolak),
    ];
    let summary = summarize(&rows);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.returned, 1);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summarize(&[]), ReportSummary::default());
}

#[test]
fn month_filter_keys_on_the_loan_date() {
    let rows = vec![
        row(1, "2026-07-31", LoanStatus::Dipinjam),
        row(2, "2026-08-01", LoanStatus::Dipinjam),
        row(3, "2026-08-15", LoanStatus::Menunggu),
    ];
    let filtered = filter_rows(&rows, "2026-08", "");
    let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);

    // empty month selects everything
    assert_eq!(filter_rows(&rows, "", "").len(), 3);
}

#[test]
fn status_filter_uses_wire_tokens() {
    let rows = vec![
        row(1, "2026-08-01", LoanStatus::Menunggu),
        row(2, "2026-08-02", LoanStatus::Dikembalikan),
    ];
    let filtered = filter_rows(&rows, "", "dikembalikan");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);

    // an unknown token (or the "all" option) selects everything
    assert_eq!(filter_rows(&rows, "", "").len(), 2);
    assert_eq!(filter_rows(&rows, "", "whatever").len(), 2);
}

#[test]
fn filters_compose() {
    let rows = vec![
        row(1, "2026-08-01", LoanStatus::Menunggu),
        row(2, "2026-08-02", LoanStatus::Dipinjam),
        row(3, "2026-09-01", LoanStatus::Dipinjam),
    ];
    let filtered = filter_rows(&rows, "2026-08", "dipinjam");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
}
