//! Analysis over small but complete real-world style designs.

use veriscan_conformance::{analyze, has_error, has_warning};
use veriscan_diagnostics::DiagnosticCode;

#[test]
fn clean_counter_design() {
    let src = "\
module counter (input clk, input rst_n, output [3:0] count);
    reg [3:0] count_r;

    always @(posedge clk) begin
        if (!rst_n)
            count_r <= 4'd0;
        else
            count_r <= count_r + 4'd1;
    end

    assign count = count_r;
endmodule
";
    let report = analyze(src);
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
    assert!(report.warnings.is_empty());

    let info = report.module_info.unwrap();
    assert_eq!(info.name, "counter");
    assert_eq!(info.port_count, 3);
    assert_eq!(info.signal_count, 1);
    assert_eq!(info.always_block_count, 1);
    assert_eq!(info.assign_count, 1);
}

#[test]
fn mux_with_case_statement() {
    let src = "\
module mux4 (input [1:0] sel, input [3:0] d, output reg y);
    always @(*) begin
        case (sel)
            2'd0: y = d[0];
            2'd1: y = d[1];
            2'd2: y = d[2];
            2'd3: y = d[3];
        endcase
    end
endmodule
";
    let report = analyze(src);
    assert!(report.is_valid);
    // The @(*) style is flagged as advisory only
    assert!(has_warning(&report, DiagnosticCode::ImplicitSensitivity));
    assert!(!has_error(&report, DiagnosticCode::MissingEndcase));
}

#[test]
fn truncated_design_reports_structure_and_errors() {
    // A file cut off mid-edit: unclosed case and begin, missing terminator
    let src = "\
module fsm (input clk, input go, output reg busy);
    reg [1:0] state
    always @(posedge clk) begin
        case (state)
            2'd0: busy = go;
";
    let report = analyze(src);
    assert!(!report.is_valid);
    assert!(has_error(&report, DiagnosticCode::MissingSemicolon));
    assert!(has_error(&report, DiagnosticCode::MissingEndcase));
    assert!(has_error(&report, DiagnosticCode::MissingEnd));

    // Structure is still extracted from the broken source
    let info = report.module_info.unwrap();
    assert_eq!(info.name, "fsm");
    assert_eq!(info.port_count, 3);
}

#[test]
fn latch_prone_design_stays_valid() {
    let src = "\
module latchy (input en, input d, output reg q);
    always
        if (en) q = d;
endmodule
";
    let report = analyze(src);
    assert!(report.is_valid);
    assert!(has_warning(&report, DiagnosticCode::PotentialLatch));
}

#[test]
fn feedback_oscillator_is_flagged() {
    let src = "\
module osc (output out);
    wire inv;
    assign inv = ~inv;
    assign out = inv;
endmodule
";
    let report = analyze(src);
    assert!(has_warning(&report, DiagnosticCode::CombinationalLoop));
    assert!(report.is_valid, "combinational loop is advisory");
}
