//! Posix rwx permission bits and their chmod-style octal encoding.
//!
//! Only the nine rwx bits are modeled; sticky, setuid and setgid are out of
//! scope, so every encoded mode lands in `0..=0o777`.

/// A single Posix permission bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    OwnerRead,
    OwnerWrite,
    OwnerExec,
    GroupRead,
    GroupWrite,
    GroupExec,
    OthersRead,
    OthersWrite,
    OthersExec,
}

impl Permission {
    /// All nine permissions, owner first, read before write before exec.
    pub const ALL: [Permission; 9] = [
        Permission::OwnerRead,
        Permission::OwnerWrite,
        Permission::OwnerExec,
        Permission::GroupRead,
        Permission::GroupWrite,
        Permission::GroupExec,
        Permission::OthersRead,
        Permission::OthersWrite,
        Permission::OthersExec,
    ];

    /// The chmod-style bit value of this permission.
    pub const fn mode_bit(self) -> u32 {
        match self {
            Permission::OwnerRead => 0o400,
            Permission::OwnerWrite => 0o200,
            Permission::OwnerExec => 0o100,
            Permission::GroupRead => 0o040,
            Permission::GroupWrite => 0o020,
            Permission::GroupExec => 0o010,
            Permission::OthersRead => 0o004,
            Permission::OthersWrite => 0o002,
            Permission::OthersExec => 0o001,
        }
    }
}

/// An immutable set of Posix permission bits.
///
/// The encoding is always a mode integer in `[0, 0o777]`; constructing one
/// from a wider mode masks the extra bits off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionSet(u32);

impl PermissionSet {
    /// The set with no permissions at all (mode 0).
    pub const fn empty() -> Self {
        PermissionSet(0)
    }

    /// Build a set from a chmod-style mode integer. Bits outside the nine
    /// rwx positions (setuid, sticky, file-type bits from `st_mode`) are
    /// masked off.
    pub const fn from_mode(mode: u32) -> Self {
        PermissionSet(mode & 0o777)
    }

    /// Whether `permission` is present in the set.
    pub const fn contains(self, permission: Permission) -> bool {
        self.0 & permission.mode_bit() != 0
    }

    /// A copy of the set with `permission` added.
    pub const fn with(self, permission: Permission) -> Self {
        PermissionSet(self.0 | permission.mode_bit())
    }

    /// Add `permission` in place.
    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission.mode_bit();
    }

    /// The chmod-style octal mode integer, always in `[0, 0o777]`.
    pub const fn octal_mode(self) -> u32 {
        self.0
    }

    /// The unprefixed octal rendering of the mode, e.g. `0o751` → `"751"`.
    pub fn octal_string(self) -> String {
        format!("{:o}", self.0)
    }

    /// True only when owner, group *and* others all carry the exec bit.
    ///
    /// Deliberately stricter than "any exec bit set"; used to validate
    /// artifacts that must be runnable by every user.
    pub const fn has_full_executable(self) -> bool {
        self.0 & 0o111 == 0o111
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::empty();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}
