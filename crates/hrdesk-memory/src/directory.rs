//! Hardcoded stand-in for a real HR directory API.
//!
//! Two demo users back the whole surface. A production backend replaces
//! this by implementing `HrDirectory`; the assembler never sees the
//! difference because every lookup already returns `None` for unknown ids.

use hrdesk_core::traits::HrDirectory;
use hrdesk_core::types::{ManagerChain, Payslip};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub active_leaves: BTreeMap<String, u32>,
    pub manager: String,
    pub manager_email: String,
    pub org_path: String,
    pub payslip: Payslip,
}

pub struct DemoHrDirectory {
    users: BTreeMap<String, EmployeeRecord>,
}

fn leaves(casual: u32, sick: u32, earned: u32) -> BTreeMap<String, u32> {
    BTreeMap::from([
        ("casual".to_string(), casual),
        ("sick".to_string(), sick),
        ("earned".to_string(), earned),
    ])
}

fn payslip(month: &str, components: [(&str, i64); 5]) -> Payslip {
    Payslip {
        month: month.to_string(),
        components: components
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

impl DemoHrDirectory {
    pub fn new() -> Self {
        let mut users = BTreeMap::new();
        users.insert(
            "U001".to_string(),
            EmployeeRecord {
                name: "Rohit Sharma".to_string(),
                email: "rohit.sharma@example.com".to_string(),
                designation: "Senior Data Scientist".to_string(),
                department: "GenAI Practice".to_string(),
                active_leaves: leaves(4, 6, 12),
                manager: "Anurag Gupta".to_string(),
                manager_email: "anurag.gupta@example.com".to_string(),
                org_path: "Data Science > GenAI Practice > HR Tech".to_string(),
                payslip: payslip(
                    "2025-10",
                    [
                        ("basic", 60000),
                        ("hra", 30000),
                        ("pf", 7200),
                        ("bonus", 5000),
                        ("other_allowances", 8000),
                    ],
                ),
            },
        );
        users.insert(
            "U002".to_string(),
            EmployeeRecord {
                name: "Priya Verma".to_string(),
                email: "priya.verma@example.com".to_string(),
                designation: "ML Engineer".to_string(),
                department: "Credit Risk Analytics".to_string(),
                active_leaves: leaves(2, 3, 20),
                manager: "Piyush Jain".to_string(),
                manager_email: "piyush.jain@example.com".to_string(),
                org_path: "Risk & Analytics > Credit Risk > Modelling".to_string(),
                payslip: payslip(
                    "2025-10",
                    [
                        ("basic", 45000),
                        ("hra", 22000),
                        ("pf", 5400),
                        ("bonus", 3000),
                        ("other_allowances", 5000),
                    ],
                ),
            },
        );
        Self { users }
    }

    pub fn lookup(&self, user_id: &str) -> Option<&EmployeeRecord> {
        self.users.get(user_id)
    }
}

impl Default for DemoHrDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl HrDirectory for DemoHrDirectory {
    fn user_summary(&self, user_id: &str) -> Option<String> {
        self.lookup(user_id).map(|user| {
            let earned = user.active_leaves.get("earned").copied().unwrap_or(0);
            format!(
                "{} is a {} in {} with {} earned leaves available.",
                user.name, user.designation, user.department, earned
            )
        })
    }

    fn active_leaves(&self, user_id: &str) -> Option<BTreeMap<String, u32>> {
        self.lookup(user_id).map(|user| user.active_leaves.clone())
    }

    fn manager_chain(&self, user_id: &str) -> Option<ManagerChain> {
        self.lookup(user_id).map(|user| ManagerChain {
            manager: user.manager.clone(),
            manager_email: user.manager_email.clone(),
            org_path: user.org_path.clone(),
        })
    }

    fn latest_payslip(&self, user_id: &str) -> Option<Payslip> {
        self.lookup(user_id).map(|user| user.payslip.clone())
    }
}
