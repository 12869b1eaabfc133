/// One rendered property of the generated type.
///
/// `wire_name` is the original schema field name; it ends up in the
/// `[DataMember]` attribute so serialized representations stay keyed to
/// the schema's own names no matter how the member identifier is cased.
#[derive(Debug, Clone)]
pub(crate) struct MemberDecl {
    pub wire_name: String,
    pub type_name: String,
    pub member_name: String,
    pub initializer: Option<String>,
}

impl MemberDecl {
    fn render(&self) -> String {
        let mut decl = format!(
            "        [DataMember(Name = \"{}\")]\n",
            self.wire_name
        );

        match &self.initializer {
            Some(initializer) => decl.push_str(&format!(
                "        public {} {} {{ get; init; }} = {};\n",
                self.type_name, self.member_name, initializer
            )),
            None => decl.push_str(&format!(
                "        public required {} {} {{ get; init; }}\n",
                self.type_name, self.member_name
            )),
        }

        decl
    }
}

/// An ordered collection of member declarations plus the header data,
/// rendered as one complete C# source file.
#[derive(Debug, Clone)]
pub(crate) struct CsharpDocument {
    namespace: String,
    type_name: String,
    contract_name: String,
    contract_namespace: String,
    members: Vec<MemberDecl>,
}

impl CsharpDocument {
    pub fn new(
        namespace: String,
        type_name: String,
        contract_name: String,
        contract_namespace: String,
    ) -> Self {
        Self {
            namespace,
            type_name,
            contract_name,
            contract_namespace,
            members: Vec::new(),
        }
    }

    pub fn push_member(&mut self, member: MemberDecl) {
        self.members.push(member);
    }

    pub fn artifact_name(&self) -> String {
        format!("{}.{}.g.cs", self.namespace, self.type_name)
    }

    pub fn render(&self) -> String {
        let members = self
            .members
            .iter()
            .map(MemberDecl::render)
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            "// <auto-generated/>\n\
             using System.Runtime.Serialization;\n\
             \n\
             namespace {namespace}\n\
             {{\n\
             \x20   [DataContract(Name = \"{contract_name}\", Namespace = \"{contract_namespace}\")]\n\
             \x20   public sealed class {type_name}\n\
             \x20   {{\n\
             {members}\
             \x20   }}\n\
             }}\n",
            namespace = self.namespace,
            contract_name = self.contract_name,
            contract_namespace = self.contract_namespace,
            type_name = self.type_name,
            members = members,
        )
    }
}
