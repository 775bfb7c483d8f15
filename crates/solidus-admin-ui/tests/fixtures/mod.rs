//! Common test fixtures for solidus-admin-ui tests

#![allow(dead_code)]

use rstest::*;
use solidus_admin_ui::{Content, Page, Record, RenderContext};

/// Test user record
#[derive(Debug, Clone, PartialEq)]
pub struct TestUser {
	pub name: String,
	pub email: String,
	pub admin: bool,
}

impl TestUser {
	pub fn new(name: &str, email: &str) -> Self {
		Self {
			name: name.to_string(),
			email: email.to_string(),
			admin: false,
		}
	}
}

impl Record for TestUser {
	fn model_name() -> &'static str {
		"TestUser"
	}

	fn human_attribute_name(attribute: &str) -> String {
		match attribute {
			"admin" => "Administrator".to_string(),
			other => solidus_admin_ui::humanize(other),
		}
	}

	fn attribute(&self, name: &str) -> Option<Content> {
		match name {
			"name" => Some(self.name.clone().into()),
			"email" => Some(self.email.clone().into()),
			"admin" => Some(if self.admin { "yes" } else { "no" }.into()),
			_ => None,
		}
	}
}

/// Two users from the documented example
#[fixture]
pub fn ann_and_bo() -> Vec<TestUser> {
	vec![
		TestUser::new("Ann", "a@x.com"),
		TestUser::new("Bo", "b@x.com"),
	]
}

/// A single page holding Ann and Bo
#[fixture]
pub fn user_page(ann_and_bo: Vec<TestUser>) -> Page<TestUser> {
	Page::single(ann_and_bo)
}

/// An empty page
#[fixture]
pub fn empty_page() -> Page<TestUser> {
	Page::single(Vec::new())
}

/// Render context for the users listing
#[fixture]
pub fn ctx() -> RenderContext {
	RenderContext::new("/admin/users")
}
