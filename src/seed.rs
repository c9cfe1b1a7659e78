//! Deterministic seed data for every desk. The tables are read-only;
//! desks clone what they need at construction.

use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::model::document::{Document, DocumentCategory, DocumentKind};
use crate::model::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::model::payroll::{PayrollRecord, PayrollStatus, PayslipRecord};
use crate::model::role::Role;
use crate::model::session::Session;
use crate::model::team::{Availability, TeamMember};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stamp(y: i32, m: u32, d: u32, h: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Manager accounts. The first is the approver; the second is the
/// read-only profile the resolver falls back to.
pub static MANAGERS: Lazy<Vec<Session>> = Lazy::new(|| {
    vec![
        Session {
            id: "M-001".to_string(),
            name: "Ananya Iyer".to_string(),
            email: "ananya.iyer@company.com".to_string(),
            role: Role::Approver,
            team: "People Operations".to_string(),
        },
        Session {
            id: "M-002".to_string(),
            name: "Rahul Menon".to_string(),
            email: "rahul.menon@company.com".to_string(),
            role: Role::Viewer,
            team: "People Operations".to_string(),
        },
    ]
});

pub static TEAM: Lazy<Vec<TeamMember>> = Lazy::new(|| {
    vec![
        TeamMember {
            id: 1,
            name: "Neha Sharma".to_string(),
            title: "Senior Recruiter".to_string(),
            availability: Availability::OnLeave,
            leave_type: Some(LeaveType::Casual),
            leave_dates: Some("4 Aug - 8 Aug".to_string()),
            location: "Bengaluru".to_string(),
        },
        TeamMember {
            id: 2,
            name: "Arjun Patel".to_string(),
            title: "HR Generalist".to_string(),
            availability: Availability::Available,
            leave_type: None,
            leave_dates: None,
            location: "Pune".to_string(),
        },
        TeamMember {
            id: 3,
            name: "Priya Desai".to_string(),
            title: "Payroll Specialist".to_string(),
            availability: Availability::OnLeave,
            leave_type: Some(LeaveType::Sick),
            leave_dates: Some("5 Aug - 6 Aug".to_string()),
            location: "Mumbai".to_string(),
        },
        TeamMember {
            id: 4,
            name: "Vikram Singh".to_string(),
            title: "L&D Coordinator".to_string(),
            availability: Availability::Available,
            leave_type: None,
            leave_dates: None,
            location: "Gurugram".to_string(),
        },
        TeamMember {
            id: 5,
            name: "Sara Thomas".to_string(),
            title: "Talent Partner".to_string(),
            availability: Availability::Available,
            leave_type: None,
            leave_dates: None,
            location: "Kochi".to_string(),
        },
        TeamMember {
            id: 6,
            name: "Karan Gupta".to_string(),
            title: "HR Analyst".to_string(),
            availability: Availability::Available,
            leave_type: None,
            leave_dates: None,
            location: "Bengaluru".to_string(),
        },
    ]
});

pub static LEAVE_REQUESTS: Lazy<Vec<LeaveRequest>> = Lazy::new(|| {
    vec![
        LeaveRequest {
            id: 1,
            employee: "Neha Sharma".to_string(),
            leave_type: LeaveType::Casual,
            date_range: "4 Aug - 8 Aug".to_string(),
            reason: "Family function in hometown".to_string(),
            status: LeaveStatus::Approved,
            handover: "Arjun Patel".to_string(),
            decided_by: Some("Ananya Iyer".to_string()),
            decided_at: Some(stamp(2025, 7, 28, 11)),
        },
        LeaveRequest {
            id: 2,
            employee: "Priya Desai".to_string(),
            leave_type: LeaveType::Sick,
            date_range: "5 Aug - 6 Aug".to_string(),
            reason: "Viral fever, doctor advised rest".to_string(),
            status: LeaveStatus::Pending,
            handover: "Karan Gupta".to_string(),
            decided_by: None,
            decided_at: None,
        },
        LeaveRequest {
            id: 3,
            employee: "Vikram Singh".to_string(),
            leave_type: LeaveType::Annual,
            date_range: "18 Aug - 29 Aug".to_string(),
            reason: "Planned vacation with family".to_string(),
            status: LeaveStatus::Pending,
            handover: "Sara Thomas".to_string(),
            decided_by: None,
            decided_at: None,
        },
        LeaveRequest {
            id: 4,
            employee: "Karan Gupta".to_string(),
            leave_type: LeaveType::Unpaid,
            date_range: "1 Sep - 12 Sep".to_string(),
            reason: "Relocation to new city".to_string(),
            status: LeaveStatus::Rejected,
            handover: "Arjun Patel".to_string(),
            decided_by: Some("Ananya Iyer".to_string()),
            decided_at: Some(stamp(2025, 7, 30, 16)),
        },
        LeaveRequest {
            id: 5,
            employee: "Sara Thomas".to_string(),
            leave_type: LeaveType::Casual,
            date_range: "14 Aug".to_string(),
            reason: "School admission for daughter".to_string(),
            status: LeaveStatus::Pending,
            handover: "Neha Sharma".to_string(),
            decided_by: None,
            decided_at: None,
        },
    ]
});

pub static DOCUMENTS: Lazy<Vec<Document>> = Lazy::new(|| {
    vec![
        Document {
            id: "doc-handbook-2025".to_string(),
            title: "Employee Handbook 2025".to_string(),
            category: DocumentCategory::Policy,
            file_name: "employee-handbook-2025.pdf".to_string(),
            size_bytes: 2_480_000,
            kind: DocumentKind::Pdf,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 1, 6, 10),
        },
        Document {
            id: "doc-neha-offer".to_string(),
            title: "Neha Sharma - Offer Letter".to_string(),
            category: DocumentCategory::OfferLetter,
            file_name: "neha-sharma-offer.pdf".to_string(),
            size_bytes: 184_320,
            kind: DocumentKind::Pdf,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 2, 14, 9),
        },
        Document {
            id: "doc-neha-pan".to_string(),
            title: "Neha Sharma - PAN Card".to_string(),
            category: DocumentCategory::Identity,
            file_name: "neha-pan.jpg".to_string(),
            size_bytes: 96_500,
            kind: DocumentKind::Image,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 2, 14, 9),
        },
        Document {
            id: "doc-arjun-payslip-jun".to_string(),
            title: "Arjun Patel - Payslip June".to_string(),
            category: DocumentCategory::Payslip,
            file_name: "arjun-payslip-jun.pdf".to_string(),
            size_bytes: 52_210,
            kind: DocumentKind::Pdf,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 7, 1, 12),
        },
        Document {
            id: "doc-vikram-aws-cert".to_string(),
            title: "Vikram Singh - AWS Certificate".to_string(),
            category: DocumentCategory::Certificate,
            file_name: "vikram-aws-cert.pdf".to_string(),
            size_bytes: 310_000,
            kind: DocumentKind::Pdf,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 5, 20, 15),
        },
        Document {
            id: "doc-leave-policy-addendum".to_string(),
            title: "Leave Policy Addendum".to_string(),
            category: DocumentCategory::Policy,
            file_name: "leave-policy-addendum.docx".to_string(),
            size_bytes: 48_770,
            kind: DocumentKind::Word,
            url: "#".to_string(),
            uploaded_at: stamp(2025, 6, 2, 11),
        },
    ]
});

/// Newest month first, the order the summary page renders.
pub static PAYROLL: Lazy<Vec<PayrollRecord>> = Lazy::new(|| {
    vec![
        PayrollRecord {
            month: date(2025, 7, 1),
            status: PayrollStatus::Processing,
            remarks: "Cycle closes 5 Aug".to_string(),
        },
        PayrollRecord {
            month: date(2025, 6, 1),
            status: PayrollStatus::Paid,
            remarks: "Disbursed 30 Jun".to_string(),
        },
        PayrollRecord {
            month: date(2025, 5, 1),
            status: PayrollStatus::Paid,
            remarks: "Disbursed 30 May".to_string(),
        },
        PayrollRecord {
            month: date(2025, 4, 1),
            status: PayrollStatus::Paid,
            remarks: "Includes annual bonus".to_string(),
        },
        PayrollRecord {
            month: date(2025, 3, 1),
            status: PayrollStatus::Paid,
            remarks: "Disbursed 28 Mar".to_string(),
        },
        PayrollRecord {
            month: date(2025, 2, 1),
            status: PayrollStatus::Paid,
            remarks: "Disbursed 28 Feb".to_string(),
        },
    ]
});

pub static PAYSLIPS: Lazy<Vec<PayslipRecord>> = Lazy::new(|| {
    vec![
        PayslipRecord {
            month: date(2025, 6, 1),
            base: 95_000.0,
            allowances: 12_500.0,
            deductions: 9_800.0,
        },
        PayslipRecord {
            month: date(2025, 5, 1),
            base: 95_000.0,
            allowances: 11_000.0,
            deductions: 9_800.0,
        },
        PayslipRecord {
            month: date(2025, 4, 1),
            base: 92_000.0,
            allowances: 18_400.0,
            deductions: 9_500.0,
        },
    ]
});
