//! アプリ台帳レコードの型定義

use crate::schema::{self, FIELD_COUNT};
use serde::{Deserialize, Serialize};

/// アプリ台帳の1レコード
///
/// JSON/CSVの列名はスキーマの表示名（"App Name" など）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppRecord {
    #[serde(rename = "App Name")]
    pub app_name: String,

    #[serde(rename = "Problem It Solves")]
    pub problem_it_solves: String,

    #[serde(rename = "Submitted By")]
    pub submitted_by: String,

    #[serde(rename = "App Type")]
    pub app_type: String,

    #[serde(rename = "Tech Stack")]
    pub tech_stack: String,

    #[serde(rename = "AI Used?")]
    pub ai_used: String,

    #[serde(rename = "User Inputs")]
    pub user_inputs: String,

    #[serde(rename = "Core Outputs")]
    pub core_outputs: String,

    #[serde(rename = "Automations")]
    pub automations: String,

    #[serde(rename = "Link to Video Tutorial")]
    pub video_tutorial_link: String,

    #[serde(rename = "GitHub/Code Link")]
    pub code_link: String,

    #[serde(rename = "Notes / Future Ideas")]
    pub notes: String,
}

impl AppRecord {
    /// 初回起動時のサンプル
    pub fn sample() -> Self {
        Self {
            app_name: "Invoice Tracker + Reminder Tool".into(),
            problem_it_solves: "Tracks unpaid invoices and automates follow-up emails".into(),
            submitted_by: "Cleaning business owner".into(),
            app_type: "Internal tool".into(),
            tech_stack: "Streamlit + Google Sheets + Gmail API (optional)".into(),
            ai_used: "Yes – GPT for reminder message generation (toggle option)".into(),
            user_inputs: "Client name, invoice amount, due date".into(),
            core_outputs: "Table of unpaid invoices + reminder log".into(),
            automations: "Sends reminder emails after X days past due".into(),
            video_tutorial_link: String::new(),
            code_link: String::new(),
            notes: "Add client payment status updates, SMS reminders".into(),
        }
    }

    /// 列名で値を取得
    pub fn get(&self, column: &str) -> Option<&str> {
        let value = match column {
            schema::APP_NAME => &self.app_name,
            schema::PROBLEM_IT_SOLVES => &self.problem_it_solves,
            schema::SUBMITTED_BY => &self.submitted_by,
            schema::APP_TYPE => &self.app_type,
            schema::TECH_STACK => &self.tech_stack,
            schema::AI_USED => &self.ai_used,
            schema::USER_INPUTS => &self.user_inputs,
            schema::CORE_OUTPUTS => &self.core_outputs,
            schema::AUTOMATIONS => &self.automations,
            schema::VIDEO_TUTORIAL_LINK => &self.video_tutorial_link,
            schema::CODE_LINK => &self.code_link,
            schema::NOTES => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// 列名で値を設定。スキーマ外の列名なら false
    pub fn set(&mut self, column: &str, value: impl Into<String>) -> bool {
        let slot = match column {
            schema::APP_NAME => &mut self.app_name,
            schema::PROBLEM_IT_SOLVES => &mut self.problem_it_solves,
            schema::SUBMITTED_BY => &mut self.submitted_by,
            schema::APP_TYPE => &mut self.app_type,
            schema::TECH_STACK => &mut self.tech_stack,
            schema::AI_USED => &mut self.ai_used,
            schema::USER_INPUTS => &mut self.user_inputs,
            schema::CORE_OUTPUTS => &mut self.core_outputs,
            schema::AUTOMATIONS => &mut self.automations,
            schema::VIDEO_TUTORIAL_LINK => &mut self.video_tutorial_link,
            schema::CODE_LINK => &mut self.code_link,
            schema::NOTES => &mut self.notes,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// スキーマ順の値
    pub fn values(&self) -> [&str; FIELD_COUNT] {
        [
            self.app_name.as_str(),
            self.problem_it_solves.as_str(),
            self.submitted_by.as_str(),
            self.app_type.as_str(),
            self.tech_stack.as_str(),
            self.ai_used.as_str(),
            self.user_inputs.as_str(),
            self.core_outputs.as_str(),
            self.automations.as_str(),
            self.video_tutorial_link.as_str(),
            self.code_link.as_str(),
            self.notes.as_str(),
        ]
    }
}
