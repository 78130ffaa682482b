//! TypeScript enum builder.

use graphtype_codegen::{CodeBuilder, CodeFragment, Renderable};

/// One member of a string enum.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub key: String,
    pub value: String,
    pub doc: Option<String>,
}

impl EnumMember {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

/// Builder for TypeScript string enums (`enum Foo { A = 'A' }`).
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    members: Vec<EnumMember>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = EnumMember>) -> Self {
        self.members.extend(members);
        self
    }

    /// Build the enum as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        let last = self.members.len().saturating_sub(1);
        let body = self
            .members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| {
                let separator = if i == last { "" } else { "," };
                member
                    .doc
                    .iter()
                    .map(|doc| CodeFragment::JsDoc(doc.clone()))
                    .chain(std::iter::once(CodeFragment::Line(format!(
                        "{} = '{}'{}",
                        member.key, member.value, separator
                    ))))
                    .collect::<Vec<_>>()
            })
            .collect();

        fragments.push(CodeFragment::Block {
            header: format!("export enum {} {{", self.name),
            body,
            close: Some("}".to_string()),
        });

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum() {
        let e = Enum::new("Episode")
            .member(EnumMember::new("NEWHOPE", "NEWHOPE"))
            .member(EnumMember::new("EMPIRE", "EMPIRE"))
            .build();
        assert_eq!(
            e,
            "export enum Episode {\n  NEWHOPE = 'NEWHOPE',\n  EMPIRE = 'EMPIRE'\n}\n"
        );
    }

    #[test]
    fn test_enum_member_doc() {
        let e = Enum::new("Episode")
            .doc(Some("Star Wars films".to_string()))
            .member(EnumMember::new("NewHope", "NEW_HOPE").doc(Some("Released in 1977.".to_string())))
            .build();
        assert_eq!(
            e,
            "/** Star Wars films */\nexport enum Episode {\n  /** Released in 1977. */\n  NewHope = 'NEW_HOPE'\n}\n"
        );
    }
}
