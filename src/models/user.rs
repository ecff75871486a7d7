//! User model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }

    /// Display name of the role
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// A user record as stored in the users file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl User {
    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Identity of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub full_name: String,
}

/// An authenticated session, tagged by role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin(Profile),
    Student(Profile),
}

const ADMIN_MENU: &[&str] = &[
    "Manage Events",
    "View All Events",
    "View Event Statistics",
    "View Registration Reports",
    "Manage Users",
    "Logout",
];

const STUDENT_MENU: &[&str] = &[
    "Browse Available Events",
    "My Registrations",
    "Search Events",
    "Logout",
];

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Admin(_) => Role::Admin,
            Session::Student(_) => Role::Student,
        }
    }

    /// Numbered dashboard entries, the last one is always logout
    pub fn menu(&self) -> &'static [&'static str] {
        match self {
            Session::Admin(_) => ADMIN_MENU,
            Session::Student(_) => STUDENT_MENU,
        }
    }

    pub fn profile(&self) -> &Profile {
        match self {
            Session::Admin(profile) | Session::Student(profile) => profile,
        }
    }

    pub fn username(&self) -> &str {
        &self.profile().username
    }

    pub fn full_name(&self) -> &str {
        &self.profile().full_name
    }
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        let profile = Profile {
            username: user.username.clone(),
            full_name: user.full_name.clone(),
        };
        match user.role {
            Role::Admin => Session::Admin(profile),
            Role::Student => Session::Student(profile),
        }
    }
}
