
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod bid_test;
    pub mod claim_test;
    pub mod fees_test;
    pub mod guards_test;
    pub mod registry_test;
    pub mod resell_test;
    pub mod sell_test;

    // --- Enumeration & signed withdrawal coverage ---
    pub mod enumeration_test;
    pub mod withdraw_fee_test;
}
