// Integration tests for the stack side of the machine model

use rustc_hash::FxHashMap;
use stacktty::machine::value::RegValue;
use stacktty::machine::{Machine, Register, StackFrame};

fn frame(label: &str, params: Vec<i64>) -> StackFrame {
    StackFrame::new(label, params, FxHashMap::default())
}

#[test]
fn test_push_stack_frame() {
    let mut machine = Machine::new();
    machine.push_frame(frame("0x1000", vec![1, 2]));

    assert_eq!(machine.stack().depth(), 1);
    assert_eq!(machine.stack().top().unwrap().return_address, "0x1000");
    assert_eq!(
        machine.register(Register::Eax),
        &RegValue::Label("0x1000".to_string())
    );
}

#[test]
fn test_pop_stack_frame() {
    let mut machine = Machine::new();
    machine.push_frame(frame("0x1000", vec![1, 2]));

    let popped = machine.pop_frame().expect("stack should not be empty");
    assert_eq!(popped.return_address, "0x1000");
    assert_eq!(machine.stack().depth(), 0);
    assert_eq!(
        machine.register(Register::Eax),
        &RegValue::Label("0x1000".to_string())
    );
}

#[test]
fn test_pop_removes_exactly_one_frame() {
    let mut machine = Machine::new();
    machine.push_frame(frame("first", vec![]));
    machine.push_frame(frame("second", vec![]));

    let popped = machine.pop_frame().unwrap();
    assert_eq!(popped.return_address, "second");
    assert_eq!(machine.stack().depth(), 1);
    assert_eq!(machine.stack().top().unwrap().return_address, "first");
}

#[test]
fn test_pop_on_empty_stack_is_a_noop() {
    let mut machine = Machine::new();
    assert!(machine.pop_frame().is_none());
    assert_eq!(machine.stack().depth(), 0);
    // No side effects either
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(0));
}

#[test]
fn test_call_function_pushes_frame_with_generated_address() {
    let mut machine = Machine::new();
    machine.call("add", vec![5, 3]);

    assert_eq!(machine.stack().depth(), 1);
    let top = machine.stack().top().unwrap();
    // Return addresses are synthesized from the stack depth at call time
    assert_eq!(top.return_address, "0x0001");
    assert_eq!(top.parameters, vec![5, 3]);
    assert!(top.locals.is_empty());
}

#[test]
fn test_call_addresses_grow_with_depth() {
    let mut machine = Machine::new();
    machine.call("add", vec![1, 2]);
    machine.call("subtract", vec![3, 4]);
    machine.call("mystery", vec![]);

    let addresses: Vec<_> = machine
        .stack()
        .frames()
        .iter()
        .map(|f| f.return_address.as_str())
        .collect();
    assert_eq!(addresses, vec!["0x0001", "0x0002", "0x0003"]);
}

#[test]
fn test_call_add_stores_result_in_eax() {
    let mut machine = Machine::new();
    machine.call("add", vec![5, 3]);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(8));
}

#[test]
fn test_call_subtract_stores_result_in_eax() {
    let mut machine = Machine::new();
    machine.call("subtract", vec![5, 3]);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(2));
}

#[test]
fn test_call_with_single_parameter_passes_it_through() {
    let mut machine = Machine::new();
    machine.call("add", vec![7]);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(7));

    machine.call("subtract", vec![9]);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(9));
}

#[test]
fn test_call_unknown_function_only_pushes() {
    let mut machine = Machine::new();
    machine.call("mystery", vec![1, 2, 3]);

    assert_eq!(machine.stack().depth(), 1);
    // EAX still holds the return-address label from the push; no arithmetic ran
    assert_eq!(
        machine.register(Register::Eax),
        &RegValue::Label("0x0001".to_string())
    );
    assert_eq!(machine.register(Register::Ecx), &RegValue::Int(0));
    assert_eq!(machine.register(Register::Edx), &RegValue::Int(0));
}

#[test]
fn test_call_multiply_delegates_to_widening_multiply() {
    let mut machine = Machine::new();
    machine.call("multiply", vec![6, 7]);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(42));
    assert_eq!(machine.register(Register::Edx), &RegValue::Int(0));
}

#[test]
fn test_call_loop_delegates_to_loop_simulation() {
    let mut machine = Machine::new();
    machine.call("loop", vec![3]);
    assert_eq!(machine.register(Register::Ecx), &RegValue::Int(0));
    assert_eq!(machine.trace().len(), 3);
}

#[test]
fn test_return_from_function_marks_top_inactive() {
    let mut machine = Machine::new();
    machine.call("add", vec![5, 3]);
    machine.return_from_call();

    // The frame stays on the stack, only flagged
    assert_eq!(machine.stack().depth(), 1);
    assert!(machine.stack().top().unwrap().is_inactive());
    assert_eq!(
        machine.register(Register::Eax),
        &RegValue::Label("0x0001".to_string())
    );
}

#[test]
fn test_return_is_idempotent() {
    let mut machine = Machine::new();
    machine.push_frame(frame("main", vec![]));

    machine.return_from_call();
    machine.return_from_call();
    machine.return_from_call();

    assert_eq!(machine.stack().depth(), 1);
    assert!(machine.stack().top().unwrap().is_inactive());
}

#[test]
fn test_return_on_empty_stack_is_a_noop() {
    let mut machine = Machine::new();
    machine.return_from_call();
    assert_eq!(machine.stack().depth(), 0);
    assert_eq!(machine.register(Register::Eax), &RegValue::Int(0));
}

#[test]
fn test_inactive_frame_can_still_be_popped() {
    let mut machine = Machine::new();
    machine.push_frame(frame("main", vec![]));
    machine.return_from_call();

    let popped = machine.pop_frame().unwrap();
    assert!(popped.is_inactive());
    assert!(machine.stack().is_empty());
}

#[test]
fn test_clear_resets_stack_and_registers() {
    let mut machine = Machine::new();
    machine.memory_mut().store(0x1000, 42);
    machine.call("add", vec![5, 3]);
    machine.call("loop", vec![4]);
    machine.registers_mut().set(Register::Ebx, 0x1000i64);

    machine.clear();

    assert!(machine.stack().is_empty());
    for reg in Register::ALL {
        assert_eq!(machine.register(reg), &RegValue::Int(0));
    }
    // Seeded memory survives a clear
    assert_eq!(machine.memory().load(0x1000), 42);
}

#[test]
fn test_frame_display_shows_every_field() {
    let mut f = frame("0x1000", vec![5, 3]);
    let rendered = f.to_string();
    assert!(rendered.contains("return_address=0x1000"));
    assert!(rendered.contains("parameters=[5, 3]"));
    assert!(rendered.contains("locals={}"));
    assert!(rendered.contains("inactive=false"));

    f.mark_inactive();
    assert!(f.to_string().contains("inactive=true"));
}
