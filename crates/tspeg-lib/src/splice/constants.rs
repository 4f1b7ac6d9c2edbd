//! Fixed declarations appended to every generated module.

/// Supporting types that are always present: source locations, expectation
/// shapes, the base syntax-error class, and the base tracer class. The
/// configured error type and the tracer re-export alias these internal
/// names.
pub const COMMON_TYPES: &str = r#"
export interface FilePosition {
  offset: number;
  line: number;
  column: number;
}

export interface FileRange {
  start: FilePosition;
  end: FilePosition;
  source: string;
}

export interface LiteralExpectation {
  type: "literal";
  text: string;
  ignoreCase: boolean;
}

export interface ClassParts extends Array<string | ClassParts> {}

export interface ClassExpectation {
  type: "class";
  parts: ClassParts;
  inverted: boolean;
  ignoreCase: boolean;
}

export interface AnyExpectation {
  type: "any";
}

export interface EndExpectation {
  type: "end";
}

export interface OtherExpectation {
  type: "other";
  description: string;
}

export type Expectation =
  | LiteralExpectation
  | ClassExpectation
  | AnyExpectation
  | EndExpectation
  | OtherExpectation;

declare class _TspegSyntaxError extends Error {
  public static buildMessage(expected: Expectation[], found: string | null): string;
  public message: string;
  public expected: Expectation[];
  public found: string | null;
  public location: FileRange;
  public name: string;
  constructor(message: string, expected: Expectation[], found: string | null, location: FileRange);
  format(sources: { source?: any; text: string }[]): string;
}

declare class _DefaultTracer {
  private indentLevel: number;
  public trace(event: {
    type: string;
    rule: string;
    result?: any;
    location: FileRange;
  }): void;
}
"#;

/// Internal name of the base syntax-error class in [`COMMON_TYPES`].
pub(crate) const INTERNAL_ERROR_TYPE: &str = "_TspegSyntaxError";

/// Internal name of the base tracer class in [`COMMON_TYPES`].
pub(crate) const INTERNAL_TRACER_TYPE: &str = "_DefaultTracer";
