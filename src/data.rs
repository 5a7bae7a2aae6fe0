use crate::models::FaqEntry;

pub const SUPPORT_EMAIL: &str = "support@bethelagdubai.com";
pub const SUPPORT_PHONE: &str = "+971-50-123-4567";
pub const WEBSITE_URL: &str = "https://bethelagdubai.com";
pub const WEBSITE_LABEL: &str = "bethelagdubai.com";
pub const SUPPORT_HOURS: &str = "Mon-Fri, 9 AM - 6 PM GST";

pub const FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        question: "How do I reset my password?",
        answer: "Go to Profile → Change Password or use 'Forgot Password' on the login screen.",
    },
    FaqEntry {
        question: "How do I update my profile?",
        answer: "Navigate to Profile → Profile Settings to update your information.",
    },
    FaqEntry {
        question: "Where can I see upcoming events?",
        answer: "Check the Events tab at the bottom navigation bar.",
    },
];

pub fn mailto_uri() -> String {
    format!("mailto:{}", SUPPORT_EMAIL)
}

pub fn tel_uri() -> String {
    format!("tel:{}", SUPPORT_PHONE)
}
