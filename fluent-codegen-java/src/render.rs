//! Rendering of code model types as Java source.

use std::collections::BTreeSet;

use fluent_codegen::{
    builder::{
        CodeBuilder, CodeFragment, FieldSpec, MethodSpec, ParamSpec, Renderable, Statement,
        TypeMapper, TypeRef, Value, Visibility,
    },
    code_model::{CodeModel, TypeId},
};

use crate::{JAVA_NAMING, JavaTypeMapper};

/// One `.java` file: a top-level type with its nested types.
pub struct JavaFile<'a> {
    code: &'a CodeModel,
    ty: TypeId,
    mapper: JavaTypeMapper,
}

impl<'a> JavaFile<'a> {
    pub fn new(code: &'a CodeModel, ty: TypeId) -> Self {
        let mapper = JavaTypeMapper::for_package(code.get(ty).package.as_deref());
        Self { code, ty, mapper }
    }

    /// Path relative to the output root (`com/acme/Leaf.java`).
    pub fn path(&self) -> String {
        JAVA_NAMING.file_path(&self.code.get(self.ty).qualified_name, "java")
    }

    pub fn render(&self) -> String {
        let mut out = CodeBuilder::java();
        if let Some(package) = &self.code.get(self.ty).package {
            out.push_line(&format!("package {};", package)).push_blank();
        }
        let imports = self.imports();
        if !imports.is_empty() {
            for import in &imports {
                out.push_line(&format!("import {};", import));
            }
            out.push_blank();
        }
        out.emit(&JavaClass {
            code: self.code,
            ty: self.ty,
            mapper: &self.mapper,
        });
        out.build()
    }

    /// `java.util` imports needed by this type and everything nested in it.
    fn imports(&self) -> BTreeSet<&'static str> {
        let mut imports = BTreeSet::new();
        let mut pending = vec![self.ty];
        while let Some(id) = pending.pop() {
            let decl = self.code.get(id);
            pending.extend(decl.nested.values().copied());

            let mut types: Vec<&TypeRef> = decl.fields.iter().map(|f| &f.ty).collect();
            for method in &decl.methods {
                types.extend(method.params.iter().map(|p| &p.ty));
                types.extend(method.return_type.iter());
                types.extend(method.generics.iter().flat_map(|g| g.bounds.iter()));
            }
            if types.into_iter().any(uses_list) {
                imports.insert("java.util.List");
            }

            let statements = decl.methods.iter().flat_map(|m| m.body.iter());
            for statement in statements {
                statement.walk_values(&mut |value: &Value| match value {
                    Value::CopyList(_) => {
                        imports.insert("java.util.ArrayList");
                    }
                    Value::UnmodifiableList(_) => {
                        imports.insert("java.util.Collections");
                    }
                    _ => {}
                });
            }
        }
        imports
    }
}

fn uses_list(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::List(_) => true,
        TypeRef::Array(inner) => uses_list(inner),
        _ => false,
    }
}

/// A class declaration, recursively including nested classes.
struct JavaClass<'a> {
    code: &'a CodeModel,
    ty: TypeId,
    mapper: &'a JavaTypeMapper,
}

impl Renderable for JavaClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = self.code.get(self.ty);
        let spec = &decl.spec;

        let mut header = modifiers(spec.visibility, spec.is_static);
        if spec.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str("class ");
        header.push_str(&spec.name);
        if let Some(superclass) = decl.extends {
            header.push_str(" extends ");
            header.push_str(&self.ty_str(&self.code.type_ref_of(superclass)));
        }
        header.push_str(" {");

        let mut groups: Vec<Vec<CodeFragment>> = Vec::new();
        if !decl.fields.is_empty() {
            groups.push(decl.fields.iter().flat_map(|f| self.field(f)).collect());
        }
        groups.extend(decl.methods.iter().map(|m| self.method(m)));
        groups.extend(decl.nested.values().map(|&nested| {
            JavaClass {
                code: self.code,
                ty: nested,
                mapper: self.mapper,
            }
            .to_fragments()
        }));

        let mut body = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(group);
        }

        let mut fragments = Vec::new();
        if let Some(doc) = &spec.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::block(header, body, "}"));
        fragments
    }
}

impl JavaClass<'_> {
    fn ty_str(&self, ty: &TypeRef) -> String {
        self.mapper.render_type(ty)
    }

    fn field(&self, field: &FieldSpec) -> Vec<CodeFragment> {
        let mut line = modifiers(field.visibility, field.is_static);
        if field.is_final {
            line.push_str("final ");
        }
        line.push_str(&format!("{} {}", self.ty_str(&field.ty), field.name));
        if let Some(init) = &field.initializer {
            line.push_str(&format!(" = {}", self.value(init)));
        }
        line.push(';');

        let mut fragments = Vec::new();
        if let Some(doc) = &field.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.push(CodeFragment::line(line));
        fragments
    }

    fn method(&self, method: &MethodSpec) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &method.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        for annotation in &method.annotations {
            fragments.push(CodeFragment::line(format!("@{}", annotation)));
        }

        let mut header = modifiers(method.visibility, method.is_static);
        if !method.generics.is_empty() {
            let generics: Vec<String> = method
                .generics
                .iter()
                .map(|g| {
                    if g.bounds.is_empty() {
                        g.name.clone()
                    } else {
                        let bounds: Vec<String> = g.bounds.iter().map(|b| self.ty_str(b)).collect();
                        format!("{} extends {}", g.name, bounds.join(" & "))
                    }
                })
                .collect();
            header.push_str(&format!("<{}> ", generics.join(", ")));
        }
        let return_type = method
            .return_type
            .as_ref()
            .map_or_else(|| "void".to_string(), |ty| self.ty_str(ty));
        let params: Vec<String> = method.params.iter().map(|p| self.param(p)).collect();
        header.push_str(&format!(
            "{} {}({}) {{",
            return_type,
            method.name,
            params.join(", ")
        ));

        let body = method
            .body
            .iter()
            .map(|s| CodeFragment::line(self.statement(s)))
            .collect();
        fragments.push(CodeFragment::block(header, body, "}"));
        fragments
    }

    fn param(&self, param: &ParamSpec) -> String {
        let ty = match (&param.ty, param.variadic) {
            (TypeRef::Array(element), true) => format!("{}...", self.ty_str(element)),
            (ty, _) => self.ty_str(ty),
        };
        let prefix = if param.is_final { "final " } else { "" };
        format!("{}{} {}", prefix, ty, param.name)
    }

    fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Assign { target, value } => {
                format!("{} = {};", self.value(target), self.value(value))
            }
            Statement::Return(Some(value)) => format!("return {};", self.value(value)),
            Statement::Return(None) => "return;".to_string(),
            Statement::Expr(value) => format!("{};", self.value(value)),
        }
    }

    fn value(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::String(s) => string_literal(s),
            Value::Ident(name) => name.clone(),
            Value::This => "this".to_string(),
            Value::Field { target, name } => format!("{}.{}", self.value(target), name),
            Value::New(ty) => format!("new {}()", self.ty_str(ty)),
            Value::Call {
                target,
                method,
                args,
            } => match target.as_ref() {
                Value::This => format!("{}({})", method, self.args(args)),
                target => format!("{}.{}({})", self.value(target), method, self.args(args)),
            },
            Value::SuperCall { method, args } => format!("super.{}({})", method, self.args(args)),
            Value::CopyList(inner) => {
                let inner = self.value(inner);
                format!("{inner} == null ? null : new ArrayList<>({inner})")
            }
            Value::UnmodifiableList(inner) => {
                let inner = self.value(inner);
                format!("{inner} == null ? null : Collections.unmodifiableList({inner})")
            }
        }
    }

    fn args(&self, args: &[Value]) -> String {
        args.iter()
            .map(|a| self.value(a))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Leading access and `static` modifiers, each followed by a space.
fn modifiers(visibility: Visibility, is_static: bool) -> String {
    let mut out = match visibility {
        Visibility::Public => "public ",
        Visibility::Protected => "protected ",
        Visibility::Package => "",
        Visibility::Private => "private ",
    }
    .to_string();
    if is_static {
        out.push_str("static ");
    }
    out
}

fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use fluent_codegen::builder::TypeSpec;

    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal(r#"a "b" \ c"#), r#""a \"b\" \\ c""#);
        assert_eq!(string_literal("x\ny"), r#""x\ny""#);
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(modifiers(Visibility::Public, true), "public static ");
        assert_eq!(modifiers(Visibility::Package, false), "");
    }

    #[test]
    fn test_default_package_file() {
        let mut code = CodeModel::new();
        let ty = code
            .declare_class("Point", TypeSpec::class("Point").doc("A point."))
            .unwrap();
        let file = JavaFile::new(&code, ty);

        assert_eq!(file.path(), "Point.java");
        assert_eq!(file.render(), "/** A point. */\npublic class Point {\n}\n");
    }
}
