use crate::cpu::test_helpers::{register_a, register_x, run_program, status, RAM_SIZE};
use crate::cpu::{Cpu, StatusFlag};
use crate::error::Error;

mod lda {
    use super::*;

    // Every program here ends in BRK, which sets the break flag -- expected
    // status bytes include it alongside the flags the instruction itself sets.
    register_a!(immediate_loads_value, [0xa9, 0x2a, 0x00], 0x2a, 0b0001_0000);
    register_a!(immediate_zero_sets_z, [0xa9, 0x00, 0x00], 0x00, 0b0001_0010);
    register_a!(immediate_negative_sets_n, [0xa9, 0x80, 0x00], 0x80, 0b1001_0000);
}

mod transfer {
    use super::*;

    #[test]
    fn tax_then_txa_round_trips_a() {
        let cpu = run_program(&[0xa9, 0x37, 0xaa, 0xa9, 0x00, 0x8a, 0x00]);
        assert_eq!(cpu.a, 0x37);
        assert_eq!(cpu.x, 0x37);
    }

    #[test]
    fn pha_then_pla_restores_a_and_stack_pointer() {
        let cpu = run_program(&[0xa9, 0x5a, 0x48, 0xa9, 0x00, 0x68, 0x00]);
        assert_eq!(cpu.a, 0x5a);
        assert_eq!(cpu.s, 0xff);
    }

    #[test]
    fn inx_then_dex_returns_x_to_prior_value() {
        let cpu = run_program(&[0xa2, 0x10, 0xe8, 0xca, 0x00]);
        assert_eq!(cpu.x, 0x10);
    }
}

mod inx_boundary {
    use super::*;

    register_x!(wraps_ff_to_00_sets_zero_and_carry, [0xa2, 0xff, 0xe8, 0x00], 0x00, 0b0001_0011);
    register_x!(below_ff_clears_carry, [0xa2, 0x05, 0xe8, 0x00], 0x06, 0b0001_0000);
}

mod zero_page_indexing {
    use super::*;

    #[test]
    fn zero_page_x_wraps_modulo_256() {
        let mut cpu = Cpu::new(RAM_SIZE);
        cpu.memory.poke(0x0000, 0x77).unwrap();
        cpu.load(&[0xa2, 0x01, 0xb5, 0xff, 0x00], 0x0300, 5).unwrap();
        cpu.set_entry(0x0300);
        cpu.run(false).unwrap();
        assert_eq!(cpu.a, 0x77);
    }
}

mod branch {
    use super::*;

    #[test]
    fn negative_displacement_moves_pc_backward_128() {
        let mut cpu = Cpu::new(RAM_SIZE);
        cpu.load(&[0x10, 0x80], 0x0300, 2).unwrap();
        cpu.set_entry(0x0300);
        let keep_going = cpu.step().unwrap();
        assert!(keep_going);
        assert_eq!(cpu.pc, 0x0282);
    }

    #[test]
    fn bne_loop_counts_down_to_target() {
        // X=5; loop { DEX; CPX #0; BNE loop }; BRK
        let cpu = run_program(&[0xa2, 0x05, 0xca, 0xe0, 0x00, 0xd0, 0xfb, 0x00]);
        assert_eq!(cpu.x, 0x00);
    }
}

mod compare {
    use super::*;

    #[test]
    fn equal_sets_zero_and_carry() {
        let cpu = run_program(&[0xa9, 0x40, 0xc9, 0x40, 0x00]);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(!cpu.is_status_flag_set(StatusFlag::Negative));
    }

    #[test]
    fn register_less_than_operand_clears_carry_and_sets_negative() {
        let cpu = run_program(&[0xa9, 0x40, 0xc9, 0x41, 0x00]);
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(!cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(cpu.is_status_flag_set(StatusFlag::Negative));
    }

    #[test]
    fn register_greater_than_operand_sets_carry_only() {
        let cpu = run_program(&[0xa9, 0x40, 0xc9, 0x3f, 0x00]);
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(!cpu.is_status_flag_set(StatusFlag::Negative));
    }
}

// Named vectors from http://www.6502.org/tutorials/vflag.html, the classic
// exercise of ADC/SBC's carry and signed-overflow interaction.
mod adc_overflow_carry {
    use super::*;

    fn adc(a: u8, m: u8) -> Cpu {
        run_program(&[0xa9, a, 0x69, m, 0x00])
    }

    #[test]
    fn positive_plus_positive_no_overflow() {
        let cpu = adc(0x50, 0x10);
        assert_eq!(cpu.a, 0x60);
        assert!(!cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(!cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn positive_plus_positive_overflows_into_negative() {
        let cpu = adc(0x50, 0x50);
        assert_eq!(cpu.a, 0xa0);
        assert!(cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(!cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn negative_plus_negative_overflows_into_positive() {
        let cpu = adc(0xd0, 0x90);
        assert_eq!(cpu.a, 0x60);
        assert!(cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn negative_plus_negative_no_overflow() {
        let cpu = adc(0xd0, 0xd0);
        assert_eq!(cpu.a, 0xa0);
        assert!(!cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }
}

mod sbc_overflow_carry {
    use super::*;

    // SEC first: SBC's borrow-in is `1 - C`, so C=1 means "no incoming borrow".
    fn sbc(a: u8, m: u8) -> Cpu {
        run_program(&[0xa9, a, 0x38, 0xe9, m, 0x00])
    }

    #[test]
    fn positive_minus_negative_overflows() {
        let cpu = sbc(0x50, 0xf0);
        assert_eq!(cpu.a, 0x60);
        assert!(cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(!cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn positive_minus_small_positive_no_overflow() {
        let cpu = sbc(0x50, 0x30);
        assert_eq!(cpu.a, 0x20);
        assert!(!cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn negative_minus_positive_overflows() {
        let cpu = sbc(0xd0, 0x70);
        assert_eq!(cpu.a, 0x60);
        assert!(cpu.is_status_flag_set(StatusFlag::Overflow));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }
}

mod bit_instruction {
    use super::*;

    #[test]
    fn flags_come_from_the_operand_not_the_result() {
        // M=0xc0 (N,V set) ANDed with A=0x00 -> zero result, but N/V mirror M.
        let cpu = run_program(&[0xa9, 0x00, 0x8d, 0x00, 0x02, 0xa9, 0xc0, 0x2c, 0x00, 0x02, 0x00]);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(cpu.is_status_flag_set(StatusFlag::Negative));
        assert!(cpu.is_status_flag_set(StatusFlag::Overflow));
    }
}

mod illegal_opcode {
    use super::*;

    #[test]
    fn unassigned_slot_is_fatal() {
        let mut cpu = Cpu::new(RAM_SIZE);
        cpu.load(&[0x02], 0x0300, 1).unwrap();
        cpu.set_entry(0x0300);
        assert_eq!(
            cpu.step(),
            Err(Error::IllegalInstruction {
                opcode: 0x02,
                pc: 0x0300
            })
        );
    }

    #[test]
    fn out_of_bounds_fetch_is_fatal() {
        let mut cpu = Cpu::new(4);
        cpu.set_entry(4);
        assert!(cpu.step().is_err());
    }

    // 0x40 (RTI) is not implemented. It once had a real addressing mode
    // (Implied) in ADDRESSING_MODE_TABLE while its operation-table slot was
    // the unreachable!()-panicking stub, so step()'s `mode == Mode::None`
    // guard missed it and a program hitting this opcode panicked instead of
    // halting. Dedicated regression test for that opcode specifically.
    #[test]
    fn rti_slot_is_fatal_not_a_panic() {
        let mut cpu = Cpu::new(RAM_SIZE);
        cpu.load(&[0x40], 0x0300, 1).unwrap();
        cpu.set_entry(0x0300);
        assert_eq!(
            cpu.step(),
            Err(Error::IllegalInstruction {
                opcode: 0x40,
                pc: 0x0300
            })
        );
    }
}

// End-to-end scenarios straight out of the design document.
mod scenarios {
    use super::*;

    #[test]
    fn store_constants() {
        let cpu = run_program(&[0xa9, 0x01, 0x8d, 0x01, 0x00, 0x00]);
        let mut buf = [0u8; 1];
        cpu.store(&mut buf, 0x0001, 1).unwrap();
        assert_eq!(buf[0], 0x01);
        assert_eq!(cpu.a, 0x01);
    }

    #[test]
    fn overflow_transfer_adc() {
        let cpu = run_program(&[0xa9, 0xc0, 0xaa, 0xe8, 0x69, 0xc4, 0x00]);
        assert_eq!(cpu.a, 0x84);
        assert_eq!(cpu.x, 0xc1);
        assert_eq!(cpu.y, 0x00);
        assert!(cpu.is_status_flag_set(StatusFlag::Negative));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
        assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
    }

    #[test]
    fn counted_loop_with_branch() {
        let program = [
            0xa2, 0x08, 0xca, 0x8e, 0x00, 0x02, 0xe0, 0x03, 0xd0, 0xf8, 0x8e, 0x01, 0x02, 0x00,
        ];
        let cpu = run_program(&program);
        let mut buf = [0u8; 2];
        cpu.store(&mut buf, 0x0200, 2).unwrap();
        assert_eq!(buf[0], 0x03);
        assert_eq!(buf[1], 0x03);
        assert_eq!(cpu.x, 0x03);
        assert!(cpu.is_status_flag_set(StatusFlag::Zero));
        assert!(cpu.is_status_flag_set(StatusFlag::Carry));
    }

    #[test]
    fn indexed_indirect_load() {
        let program = [
            0xa2, 0x01, 0xa9, 0x05, 0x85, 0x01, 0xa9, 0x03, 0x85, 0x02, 0xa0, 0x0a, 0x8c, 0x05,
            0x03, 0xa1, 0x00, 0x00,
        ];
        let cpu = run_program(&program);
        assert_eq!(cpu.a, 0x0a);
        let mut buf = [0u8; 1];
        cpu.store(&mut buf, 0x0305, 1).unwrap();
        assert_eq!(buf[0], 0x0a);
    }

    #[test]
    fn jsr_rts_preserves_caller_state() {
        let program = [
            0x20, 0x09, 0x03, 0x20, 0x0c, 0x03, 0x20, 0x12, 0x03, 0xa2, 0x00, 0x60, 0xe8, 0xe0,
            0x05, 0xd0, 0xfb, 0x60, 0x00, 0x00,
        ];
        let cpu = run_program(&program);
        assert_eq!(cpu.x, 0x05);
    }
}

mod memory_invariants {
    use super::*;

    #[test]
    fn status_expansion_bit_always_set() {
        let cpu = run_program(&[0xa9, 0x00, 0x00]);
        assert!(cpu.is_status_flag_set(StatusFlag::Expansion));
    }

    #[test]
    fn stack_pointer_stays_in_page_one_range() {
        // Push more than fits before pulling; S must wrap, never fault.
        let mut cpu = Cpu::new(RAM_SIZE);
        cpu.load(&[0xa9, 0x01, 0x48, 0x48, 0x48, 0x00], 0x0300, 6).unwrap();
        cpu.set_entry(0x0300);
        cpu.run(false).unwrap();
        assert!(cpu.s <= 0xff);
    }
}

#[test]
fn status_helper_folds_in_expansion_bit() {
    assert_eq!(status(0), 0b0010_0000);
}
