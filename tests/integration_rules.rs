// tests/integration_rules.rs
//! Source-level rule cases: extraction, origin, classification and policy
//! together, through the engine.

use std::path::Path;

use fsdlint_core::config::{Config, FsdToml, RuleMode};
use fsdlint_core::engine::Engine;
use fsdlint_core::rules::{cross_layer, segments};
use fsdlint_core::types::{Severity, Violation};

fn engine() -> Engine {
    Engine::new(Config::new()).unwrap()
}

fn check_with(engine: &Engine, file: &str, code: &str) -> Vec<Violation> {
    engine.check_source(Path::new(file), code).unwrap().violations
}

fn layer_violations(file: &str, code: &str) -> Vec<Violation> {
    check_with(&engine(), file, code)
        .into_iter()
        .filter(|v| v.rule == cross_layer::RULE_ID)
        .collect()
}

#[test]
fn valid_layer_references() {
    let cases = [
        ("/project/src/app/App.js", "import { MainPage } from '@/pages/main';"),
        ("/project/src/pages/home/index.js", "import { Header } from '@/widgets/header';"),
        ("/project/src/widgets/sidebar/Sidebar.js", "import { LoginForm } from '@/features/auth';"),
        ("/project/src/features/profile/index.js", "import { User } from '@/entities/user';"),
        ("/project/src/entities/post/ui/PostCard.js", "import { Button } from '@/shared/ui';"),
        ("/project/src/entities/user/index.js", "import { UserCard } from './UserCard';"),
        ("/project/src/pages/home/index.js", "import React from 'react';"),
        ("/project/src/config/index.js", "import { something } from '@/app/config';"),
        ("/project/src/features/auth/index.js", "const User = require('@/entities/user');"),
        ("/project/src/features/auth/index.js", "const module = import('@/entities/user');"),
        ("/project/src/features/auth/index.js", "import { User } from '../../../entities/user';"),
    ];
    for (file, code) in cases {
        assert!(layer_violations(file, code).is_empty(), "{file}: {code}");
    }
}

#[test]
fn invalid_layer_references() {
    let cases = [
        ("/project/src/pages/home/index.js", "import { config } from '@/app/config';", "pages", "app"),
        ("/project/src/widgets/header/Header.js", "import { HomePage } from '@/pages/home';", "widgets", "pages"),
        ("/project/src/features/auth/index.js", "import { Sidebar } from '@/widgets/sidebar';", "features", "widgets"),
        ("/project/src/entities/user/model.js", "import { login } from '@/features/auth';", "entities", "features"),
        ("/project/src/shared/ui/Avatar.js", "import { User } from '@/entities/user';", "shared", "entities"),
        ("/project/src/shared/config/index.js", "import { App } from '@/app';", "shared", "app"),
        ("/project/src/features/auth/index.js", "const Header = require('@/widgets/header');", "features", "widgets"),
        ("/project/src/widgets/header/index.js", "const module = import('@/pages/home');", "widgets", "pages"),
        ("/project/src/entities/user/index.js", "import { HomePage } from '../../../pages/home';", "entities", "pages"),
    ];
    for (file, code, from, to) in cases {
        let found = layer_violations(file, code);
        assert_eq!(found.len(), 1, "{file}: {code}");
        let expected = format!(
            "Layer hierarchy violation: \"{from}\" layer cannot import from \"{to}\" layer. Follow FSD layer order"
        );
        assert_eq!(found[0].message, expected);
    }
}

#[test]
fn violation_row_points_at_reference() {
    let code = "import React from 'react';\nimport { x } from '@/app/providers';\n";
    let found = layer_violations("src/features/auth/index.ts", code);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].row, 2);
}

#[test]
fn invalid_segments() {
    let cases = [
        ("/project/src/entities/user/utils/helper.ts", "utils", "entities", "user"),
        ("/project/src/entities/user/helpers/format.ts", "helpers", "entities", "user"),
        ("/project/src/features/auth/components/Button.tsx", "components", "features", "auth"),
        ("/project/src/features/auth/services/AuthService.ts", "services", "features", "auth"),
        ("/project/src/entities/user/constants/roles.ts", "constants", "entities", "user"),
        ("/project/src/widgets/header/utils/helpers.ts", "utils", "widgets", "header"),
        ("/project/src/entities/user/helpers/deep/nested/file.ts", "helpers", "entities", "user"),
    ];
    let engine = engine();
    for (file, segment, layer, slice) in cases {
        let found: Vec<_> = check_with(&engine, file, "export const x = 1;")
            .into_iter()
            .filter(|v| v.rule == segments::RULE_ID)
            .collect();
        assert_eq!(found.len(), 1, "{file}");
        let expected = format!(
            "File is in invalid segment \"{segment}\" within {layer}/{slice}/. Only these segments are allowed: model, ui, api, lib, config"
        );
        assert_eq!(found[0].message, expected);
    }
}

#[test]
fn warn_mode_downgrades_severity() {
    let mut raw = FsdToml::default();
    raw.rules.no_cross_layer_import.mode = RuleMode::Warn;
    let engine = Engine::new(Config::from_toml(raw).unwrap()).unwrap();
    let found = check_with(&engine, "src/shared/ui/Avatar.ts", "import '@/entities/user';");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Warning);
}

#[test]
fn off_mode_disables_rule() {
    let mut raw = FsdToml::default();
    raw.rules.enforce_slice_segments.mode = RuleMode::Off;
    let engine = Engine::new(Config::from_toml(raw).unwrap()).unwrap();
    assert!(check_with(&engine, "src/entities/user/utils/helper.ts", "").is_empty());
}

#[test]
fn scan_counts_and_skips() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src/entities/user/utils");
    std::fs::create_dir_all(&src).unwrap();
    let bad = src.join("helper.ts");
    std::fs::write(&bad, "import { login } from '@/features/auth';\n").unwrap();
    let missing = dir.path().join("src/shared/ui/missing.ts");

    let report = engine().scan(&[bad.clone(), missing.clone()]);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.errors, 2);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.total_references, 1);
    assert_eq!(report.skipped, vec![missing]);
    assert_eq!(report.clean_file_count(), 0);
    assert!(report.has_errors());
}
