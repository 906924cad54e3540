//! `scriptgen namespace`: show the namespace a script in a folder would get

use crate::host::AsmDefNamespaceLookup;
use crate::settings::Settings;
use anyhow::Result;
use scriptgen_core::generator::full_namespace;
use scriptgen_core::{NamespaceResolver, ResolvedNamespace, ScriptPrescription};

/// The namespace written for scripts below `path`, prefix included
pub fn namespace_for(settings: &Settings, path: &str) -> (String, ResolvedNamespace) {
    let config = &settings.generator.namespace;
    let lookup = AsmDefNamespaceLookup::new(&settings.project_root);
    let resolved = NamespaceResolver::new(config)
        .with_package_lookup(&lookup)
        .resolve(path);

    let prefix = if resolved.apply_prefix {
        config.default_prefix.as_str()
    } else {
        ""
    };
    let mut prescription =
        ScriptPrescription::new("").with_namespace(prefix, resolved.namespace.clone());
    prescription.namespace_apply_prefix = resolved.apply_prefix;

    (full_namespace(&prescription), resolved)
}

pub fn run(settings: &Settings, path: &str) -> Result<()> {
    let (namespace, resolved) = namespace_for(settings, path);

    println!("{namespace}");
    if !resolved.apply_prefix {
        println!("  (root namespace of the owning assembly definition)");
    } else if resolved.namespace.is_empty() {
        println!("  (nothing inferred from the path, using the example namespace)");
    }
    Ok(())
}
