//! Built-in test templates, embedded in the binary.
//!
//! Projects can override any of these by placing a file with the same
//! relative name under their template directory; the renderer falls back
//! here when no override exists.
//!
//! The unit skeleton deliberately carries the two insertion anchors the
//! setup merger relies on: its `use ...;` import block and the
//! `parent::set_up();` statement.

/// `test/fixture.php.tpl` — data provider skeleton shared by both tests.
pub const FIXTURE: &str = r#"<?php

/**
 * Fixtures for {{base_class}}::{{base_method}}.
 */
return [
	'testShouldReturnExpected' => [
		'config'   => [],
		'expected' => [],
	],
];
"#;

/// `test/unit.php.tpl` — unit test skeleton.
pub const UNIT: &str = r#"<?php

namespace Tests\Unit;

use Mockery;
use Tests\Unit\TestCase;
use {{base_class}};

/**
 * @covers {{base_class}}::{{base_method}}
{{#has_group}} * @group {{group}}
{{/has_group}} */
class Test_{{base_method}} extends TestCase {
	protected function set_up() {
		parent::set_up();
	}

	/**
	 * @dataProvider configTestData
	 */
	public function testShouldReturnExpected( $config, $expected ) {
	}
}
"#;

/// `test/integration.php.tpl` — integration test skeleton.
pub const INTEGRATION: &str = r#"<?php

namespace Tests\Integration;

use Tests\Integration\TestCase;
use {{base_class}};

/**
 * @covers {{base_class}}::{{base_method}}
{{#has_group}} * @group {{group}}
{{/has_group}} */
class Test_{{base_method}} extends TestCase {
	/**
	 * @dataProvider configTestData
	 */
	public function testShouldReturnExpected( $config, $expected ) {
	}
}
"#;

/// Look up a built-in template by its identifier.
pub fn get(template_id: &str) -> Option<&'static str> {
    match template_id {
        "test/fixture.php.tpl" => Some(FIXTURE),
        "test/unit.php.tpl" => Some(UNIT),
        "test/integration.php.tpl" => Some(INTEGRATION),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert!(get("test/fixture.php.tpl").is_some());
        assert!(get("test/unit.php.tpl").is_some());
        assert!(get("test/integration.php.tpl").is_some());
        assert!(get("test/unknown.php.tpl").is_none());
    }

    #[test]
    fn unit_skeleton_carries_merge_anchors() {
        assert!(UNIT.contains("use {{base_class}};"));
        assert!(UNIT.contains("parent::set_up();"));
    }
}
